//! Helper role eligibility.

/// Whether a member qualifies for the helper role.
///
/// The threshold is inclusive: reaching exactly `threshold` accepted thx qualifies. A
/// helper-blacklisted member never qualifies regardless of count.
pub fn is_helper_eligible(accepted_count: u64, threshold: u32, helper_blacklisted: bool) -> bool {
    accepted_count >= u64::from(threshold) && !helper_blacklisted
}

/// Role mutation issued by a single helper recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperChange {
    Granted,
    Revoked,
    /// The member already had the correct role state.
    Unchanged,
    /// The guild has no helper role configured, or the role no longer exists.
    Disabled,
    /// The user is not a member of the guild.
    NotMember,
}

/// Tally of a guild-wide helper recompute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelperSummary {
    pub granted: usize,
    pub revoked: usize,
    pub unchanged: usize,
}

impl HelperSummary {
    pub fn record(&mut self, change: HelperChange) {
        match change {
            HelperChange::Granted => self.granted += 1,
            HelperChange::Revoked => self.revoked += 1,
            HelperChange::Unchanged => self.unchanged += 1,
            HelperChange::Disabled | HelperChange::NotMember => {}
        }
    }
}
