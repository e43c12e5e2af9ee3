use std::sync::Arc;

use crate::{
    gateway::{mock::MockGateway, MemberInfo},
    model::participant::Moderator,
};

mod giveaway;
mod notification;
mod server_config;

fn mock_gateway() -> Arc<MockGateway> {
    Arc::new(MockGateway::new())
}

fn member(user_id: u64, name: &str) -> MemberInfo {
    MemberInfo {
        user_id,
        display_name: name.to_string(),
        is_bot: false,
        role_ids: Vec::new(),
    }
}

fn moderator(user_id: u64) -> Moderator {
    Moderator {
        user_id,
        name: format!("Mod {}", user_id),
    }
}
