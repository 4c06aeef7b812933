//! Linear history invariant: each snapshot extends its predecessor.

use super::Invariant;
use crate::timeline::Timeline;
use crate::types::Square;

/// Invariant: adjacent snapshots differ by exactly one new mark.
///
/// Every snapshot after the first is its predecessor with a single
/// square transitioned from empty to occupied. Marks are never moved,
/// removed, or overwritten inside the timeline.
pub struct LinearHistoryInvariant;

impl Invariant<Timeline> for LinearHistoryInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline.snapshots().windows(2).all(|pair| {
            let mut placed = 0;
            for (prev, next) in pair[0].squares().iter().zip(pair[1].squares()) {
                match (prev, next) {
                    (a, b) if a == b => {}
                    (Square::Empty, Square::Occupied(_)) => placed += 1,
                    _ => return false,
                }
            }
            placed == 1
        })
    }

    fn description() -> &'static str {
        "Adjacent snapshots differ by exactly one newly placed mark"
    }
}
