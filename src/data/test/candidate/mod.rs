use crate::{
    data::candidate::ParticipantCandidateRepository, error::AppError,
    model::candidate::CreateCandidateParam, model::participant::ThxState,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
