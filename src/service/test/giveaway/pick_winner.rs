use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    model::participant::{Participant, ThxState},
    service::giveaway::pick_winner,
};

fn accepted(id: i32, user_id: u64) -> Participant {
    Participant {
        id,
        giveaway_id: 1,
        guild_id: 1,
        user_id,
        user_name: format!("User {}", user_id),
        channel_id: 500,
        message_id: 1_000 + id as u64,
        state: ThxState::Accepted,
        accept_user_id: Some(9),
        accept_user_name: Some("Mod".to_string()),
        accept_time: Some(Utc::now()),
        created_at: Utc::now(),
    }
}

#[test]
fn empty_pool_has_no_winner() {
    let mut rng = StdRng::seed_from_u64(7);

    assert!(pick_winner(&[], &mut rng).is_none());
}

/// Tests that every entry is drawn with roughly equal frequency.
///
/// Expected: each of 4 entries within 10% of 10 000 over 40 000 seeded draws
#[test]
fn draws_are_uniform() {
    let pool: Vec<Participant> = (0..4).map(|i| accepted(i, 10 + i as u64)).collect();
    let mut rng = StdRng::seed_from_u64(42);
    let mut counts = [0usize; 4];

    for _ in 0..40_000 {
        let winner = pick_winner(&pool, &mut rng).unwrap();
        counts[winner.id as usize] += 1;
    }

    for count in counts {
        assert!((9_000..=11_000).contains(&count), "skewed draw: {:?}", counts);
    }
}

/// Tests that a user with more accepted entries wins proportionally more often.
///
/// Expected: user 10 with 3 of 4 entries wins about 75% of draws
#[test]
fn entries_weight_users() {
    let pool = vec![accepted(0, 10), accepted(1, 10), accepted(2, 10), accepted(3, 11)];
    let mut rng = StdRng::seed_from_u64(1);

    let wins = (0..20_000)
        .filter(|_| pick_winner(&pool, &mut rng).unwrap().user_id == 10)
        .count();

    assert!((14_000..=16_000).contains(&wins), "user 10 won {} times", wins);
}
