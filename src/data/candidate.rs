//! Participant candidate repository for thx nominations.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};

use crate::model::candidate::{CreateCandidateParam, ParticipantCandidate};

/// Repository providing database operations for nominations.
pub struct ParticipantCandidateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipantCandidateRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending nomination.
    pub async fn create(&self, param: CreateCandidateParam) -> Result<ParticipantCandidate, DbErr> {
        let entity = entity::participant_candidate::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            candidate_id: ActiveValue::Set(param.candidate_id.to_string()),
            candidate_name: ActiveValue::Set(param.candidate_name),
            candidate_approver_id: ActiveValue::Set(param.approver_id.to_string()),
            candidate_approver_name: ActiveValue::Set(param.approver_name),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            is_accepted: ActiveValue::Set(None),
            accept_time: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        ParticipantCandidate::from_entity(entity)
    }

    /// Gets the nomination attached to a message.
    pub async fn find_by_message_id(
        &self,
        message_id: u64,
    ) -> Result<Option<ParticipantCandidate>, DbErr> {
        entity::prelude::ParticipantCandidate::find()
            .filter(entity::participant_candidate::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?
            .map(ParticipantCandidate::from_entity)
            .transpose()
    }

    /// Resolves a nomination if it is still pending.
    ///
    /// The update only matches rows whose `is_accepted` is null, so a nomination is
    /// resolved at most once even when two reactions race.
    ///
    /// # Arguments
    /// - `id` - Nomination ID
    /// - `is_accepted` - Resolution to record
    ///
    /// # Returns
    /// - `Ok(true)` - This call resolved the nomination
    /// - `Ok(false)` - The nomination was already resolved
    /// - `Err(DbErr)` - Database error during update
    pub async fn resolve_if_pending(&self, id: i32, is_accepted: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::ParticipantCandidate::update_many()
            .col_expr(
                entity::participant_candidate::Column::IsAccepted,
                Expr::value(is_accepted),
            )
            .col_expr(
                entity::participant_candidate::Column::AcceptTime,
                Expr::value(Utc::now()),
            )
            .filter(entity::participant_candidate::Column::Id.eq(id))
            .filter(entity::participant_candidate::Column::IsAccepted.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Returns an accepted nomination to pending.
    ///
    /// Used when the participant entry for an accepted nomination could not be created,
    /// so the approver can accept again. Only matches rows still marked accepted.
    ///
    /// # Returns
    /// - `Ok(true)` - The nomination is pending again
    /// - `Ok(false)` - The nomination was not in the accepted state
    /// - `Err(DbErr)` - Database error during update
    pub async fn reopen_if_accepted(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ParticipantCandidate::update_many()
            .col_expr(
                entity::participant_candidate::Column::IsAccepted,
                Expr::value(Option::<bool>::None),
            )
            .col_expr(
                entity::participant_candidate::Column::AcceptTime,
                Expr::value(Option::<chrono::DateTime<Utc>>::None),
            )
            .filter(entity::participant_candidate::Column::Id.eq(id))
            .filter(entity::participant_candidate::Column::IsAccepted.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ParticipantCandidate>, DbErr> {
        entity::prelude::ParticipantCandidate::find_by_id(id)
            .one(self.db)
            .await?
            .map(ParticipantCandidate::from_entity)
            .transpose()
    }
}
