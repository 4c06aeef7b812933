//! Alternating mark invariant: turn parity is positional.

use super::Invariant;
use crate::timeline::Timeline;
use crate::types::{Player, Square};

/// Invariant: the mark placed at step `k` belongs to the right player.
///
/// X owns every even step and O every odd one, counting from zero. The
/// timeline never stores whose turn it is, so this pins the derived
/// parity to the recorded snapshots.
pub struct AlternatingMarkInvariant;

impl Invariant<Timeline> for AlternatingMarkInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let expected = if step % 2 == 0 { Player::X } else { Player::O };
                pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .all(|(prev, next)| match (prev, next) {
                        (Square::Empty, Square::Occupied(player)) => *player == expected,
                        _ => true,
                    })
            })
    }

    fn description() -> &'static str {
        "Marks alternate X, O, X, ... along the timeline"
    }
}
