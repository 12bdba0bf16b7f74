//! Coin toss: stateless 50/50 flip. The cosmetic animation delay belongs to
//! the caller (the web handler sleeps before answering), not to the flip.

use crate::models::TossResult;
use rand::Rng;
use std::time::Duration;

/// How long the toss "spins" before the result is revealed.
pub const TOSS_DELAY: Duration = Duration::from_millis(1500);

/// Flip the coin: independent 50/50 draw on every call.
pub fn flip(rng: &mut impl Rng) -> TossResult {
    if rng.gen_bool(0.5) {
        TossResult::Heads
    } else {
        TossResult::Tails
    }
}
