//! Cursor bounds invariant: the displayed snapshot always exists.

use super::Invariant;
use crate::timeline::Timeline;

/// Invariant: the timeline is never empty and the cursor stays in range.
///
/// Snapshot 0 (the empty board) exists from construction onward, and
/// every operation leaves the cursor pointing at a real snapshot.
pub struct CursorBoundsInvariant;

impl Invariant<Timeline> for CursorBoundsInvariant {
    fn holds(timeline: &Timeline) -> bool {
        !timeline.snapshots().is_empty() && timeline.current_move() < timeline.snapshots().len()
    }

    fn description() -> &'static str {
        "The cursor points at an existing snapshot"
    }
}
