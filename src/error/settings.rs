use thiserror::Error;

/// A `/settings` value the bot refuses to store.
///
/// The messages are shown to the administrator as is.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// Numeric setting outside its accepted range.
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A level threshold entry is not a positive whole number.
    #[error("'{0}' is not a valid level threshold, use positive whole numbers like 10,25,50")]
    InvalidLevelThreshold(String),

    /// Level thresholds must grow from one level to the next.
    #[error("Level thresholds must be strictly ascending")]
    LevelThresholdsNotAscending,

    /// More levels than the bot keeps.
    #[error("At most {max} level thresholds can be set")]
    TooManyLevels { max: usize },
}

/// A status template the bot refuses to store.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatusTemplateError {
    #[error("Status template must not be empty")]
    Empty,

    #[error("Status template must be at most {max} characters")]
    TooLong { max: usize },

    /// The guild already keeps the maximum number of templates.
    #[error("A server can keep at most {max} status templates")]
    TooMany { max: usize },
}
