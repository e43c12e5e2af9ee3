pub use super::blacklist::Entity as Blacklist;
pub use super::giveaway::Entity as Giveaway;
pub use super::helper_blacklist::Entity as HelperBlacklist;
pub use super::participant::Entity as Participant;
pub use super::participant_candidate::Entity as ParticipantCandidate;
pub use super::server_config::Entity as ServerConfig;
pub use super::status_template::Entity as StatusTemplate;
pub use super::thx_notification::Entity as ThxNotification;
