//! Accept/reject signals shared by thx and nomination workflows.

/// Emoji used to accept a thx or nomination.
pub const ACCEPT_EMOJI: &str = "✅";
/// Emoji used to reject a thx or nomination.
pub const REJECT_EMOJI: &str = "❌";

/// A moderator's or approver's verdict.
///
/// Buttons and reactions both map onto this type, so both entry points drive the same
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    /// The value stored in the `is_accepted` column for this verdict.
    pub fn is_accepted(self) -> bool {
        matches!(self, Decision::Accept)
    }

    /// Maps a reaction emoji onto a verdict; any other emoji is not a verdict.
    pub fn from_emoji(emoji: &str) -> Option<Self> {
        match emoji {
            ACCEPT_EMOJI => Some(Decision::Accept),
            REJECT_EMOJI => Some(Decision::Reject),
            _ => None,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Decision::Accept => ACCEPT_EMOJI,
            Decision::Reject => REJECT_EMOJI,
        }
    }
}
