use rand::{seq::SliceRandom, Rng};

use crate::models::giveaway::{MemberId, Outcome};

/// Picks `count` distinct winners, every participant being equally likely regardless of
/// entry order. `shuffle` is a Fisher-Yates shuffle.
pub fn draw_winners<R: Rng + ?Sized>(participants: &[MemberId], count: u32, rng: &mut R) -> Outcome {
    if participants.is_empty() {
        return Outcome::NoParticipants;
    }

    let mut pool = participants.to_vec();
    pool.shuffle(rng);
    pool.truncate(usize::try_from(count).unwrap_or(usize::MAX));
    Outcome::Winners(pool)
}
