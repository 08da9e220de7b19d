//! Waypoint extraction: parent-chain walk plus direction-run compression.

use tilenav_grid::Point;

use crate::frontier::NodeId;
use crate::pathfinder::Pathfinder;

/// Unit direction of a step from `from` to `to`, as a signum pair.
/// `(0, 0)` means the endpoints coincide.
fn step_direction(from: Point, to: Point) -> (i32, i32) {
    ((to.x - from.x).signum(), (to.y - from.y).signum())
}

impl Pathfinder {
    /// Collapse the parent chain behind `goal_id` into a waypoint list.
    ///
    /// Cells are visited goal-first along parent handles, then the list is
    /// reversed. A cell is emitted only where the direction to its parent
    /// differs from the previously emitted step, so straight 8-way runs keep
    /// their endpoints alone. The goal is always emitted and the start never
    /// is, which leaves exactly the goal when the two coincide.
    pub(crate) fn extract_waypoints(&self, goal_id: NodeId) -> Vec<Point> {
        let mut waypoints = Vec::new();
        let mut last_dir = (0, 0);
        let mut cursor = Some(goal_id);
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            match node.parent {
                Some(parent) => {
                    let dir = step_direction(node.pos, self.nodes[parent].pos);
                    if waypoints.is_empty() || dir != last_dir {
                        waypoints.push(node.pos);
                        last_dir = dir;
                    }
                }
                // The chain root is the start cell; it is emitted only when
                // the chain has no other cell at all.
                None => {
                    if waypoints.is_empty() {
                        waypoints.push(node.pos);
                    }
                }
            }
            cursor = node.parent;
        }
        waypoints.reverse();
        waypoints
    }
}
