//! The A* loop: admissibility rules, the cost model, and frontier-driven
//! expansion.

use tilenav_grid::{OBSTACLE, Point};

use crate::frontier::NodeId;
use crate::pathfinder::{Pathfinder, cell_key};

/// Cost of one orthogonal step.
const ORTHO_COST: i64 = 10;
/// Cost of one diagonal step, approximating `10 * sqrt(2)`.
const DIAG_COST: i64 = 14;

/// Manhattan distance scaled by the orthogonal step cost.
///
/// Overestimates the true cost when diagonal movement is enabled; the path
/// shapes that follow from that are part of the engine's contract.
fn heuristic(from: Point, goal: Point) -> i64 {
    let dx = i64::from((from.x - goal.x).abs());
    let dy = i64::from((from.y - goal.y).abs());
    (dx + dy) * ORTHO_COST
}

impl Pathfinder {
    /// Compute a compressed waypoint path from start to goal.
    ///
    /// Coordinates are continuous simulation positions; they are floored to
    /// cells first. Returns `None` when the grid is uninitialized, when an
    /// endpoint lies outside it, or when no route exists. The waypoint list
    /// holds the endpoints of straight 8-way runs and always ends at the
    /// goal; the start cell itself is never included.
    pub fn find_path(
        &mut self,
        start_x: f64,
        start_y: f64,
        goal_x: f64,
        goal_y: f64,
    ) -> Option<Vec<Point>> {
        if !self.grid.is_initialized() {
            return None;
        }
        let start = Point::new(start_x.floor() as i32, start_y.floor() as i32);
        let goal = Point::new(goal_x.floor() as i32, goal_y.floor() as i32);
        let min = Point::new(start.x.min(goal.x), start.y.min(goal.y));
        let max = Point::new(start.x.max(goal.x), start.y.max(goal.y));
        if min.x < 0 || min.y < 0 || max.x >= self.grid.hcells() || max.y >= self.grid.vcells() {
            return None;
        }
        // Open terrain under diagonal movement: head straight for the goal.
        if self.grid.diagonals() && self.rect_is_clear(min, max) {
            return Some(vec![goal]);
        }

        let found = self.run_astar(start, goal);
        let path = found.map(|goal_id| self.extract_waypoints(goal_id));
        self.clear_search_state();
        match &path {
            Some(waypoints) => {
                log::debug!("path {start} -> {goal}: {} waypoints", waypoints.len());
            }
            None => log::debug!("no path {start} -> {goal}"),
        }
        path
    }

    /// Whether every cell of the inclusive rectangle has cost zero.
    fn rect_is_clear(&self, min: Point, max: Point) -> bool {
        (min.x..=max.x).all(|x| (min.y..=max.y).all(|y| self.grid.at(x, y) == 0))
    }

    /// Run the frontier loop. Returns the goal's node handle when reached;
    /// the caller extracts the path and discards the working set.
    fn run_astar(&mut self, start: Point, goal: Point) -> Option<NodeId> {
        let h = heuristic(start, goal);
        let start_id = self.alloc_node(start, 0, h, None);
        self.open_index.insert(cell_key(start), start_id);
        self.frontier.insert(self.entry(start_id));

        while !self.frontier.is_empty() {
            let Some(ci) = self.frontier.pop_min() else {
                break;
            };
            let c = self.nodes[ci].pos;
            let key = cell_key(c);
            self.open_index.remove(&key);
            self.closed.insert(key);

            if c == goal {
                return Some(ci);
            }

            let diagonals = self.grid.diagonals();
            let (x, y) = (c.x, c.y);
            let obs_left = self.grid.at(x - 1, y) == OBSTACLE;
            let obs_up = self.grid.at(x, y - 1) == OBSTACLE;
            let obs_right = self.grid.at(x + 1, y) == OBSTACLE;
            let obs_down = self.grid.at(x, y + 1) == OBSTACLE;

            // Expansion order fixes `seq` assignment and with it which of
            // several equal-cost paths wins. A diagonal step additionally
            // needs both flanking orthogonal cells open.
            if !obs_left {
                self.relax(ci, Point::new(x - 1, y), ORTHO_COST, goal);
            }
            if diagonals && !obs_left && !obs_up && self.grid.at(x - 1, y - 1) != OBSTACLE {
                self.relax(ci, Point::new(x - 1, y - 1), DIAG_COST, goal);
            }
            if !obs_up {
                self.relax(ci, Point::new(x, y - 1), ORTHO_COST, goal);
            }
            if diagonals && !obs_up && !obs_right && self.grid.at(x + 1, y - 1) != OBSTACLE {
                self.relax(ci, Point::new(x + 1, y - 1), DIAG_COST, goal);
            }
            if !obs_right {
                self.relax(ci, Point::new(x + 1, y), ORTHO_COST, goal);
            }
            if diagonals && !obs_right && !obs_down && self.grid.at(x + 1, y + 1) != OBSTACLE {
                self.relax(ci, Point::new(x + 1, y + 1), DIAG_COST, goal);
            }
            if !obs_down {
                self.relax(ci, Point::new(x, y + 1), ORTHO_COST, goal);
            }
            if diagonals && !obs_down && !obs_left && self.grid.at(x - 1, y + 1) != OBSTACLE {
                self.relax(ci, Point::new(x - 1, y + 1), DIAG_COST, goal);
            }
        }
        None
    }

    /// Consider stepping from node `ci` onto the cell `np` for `move_cost`.
    fn relax(&mut self, ci: NodeId, np: Point, move_cost: i64, goal: Point) {
        let key = cell_key(np);
        if self.closed.contains(&key) {
            return;
        }
        // Entering a cell pays the move plus the cell's own cost.
        let tentative_g = self.nodes[ci].g + move_cost + i64::from(self.grid.at(np.x, np.y));

        if let Some(&open_id) = self.open_index.get(&key) {
            if tentative_g < self.nodes[open_id].g {
                // Cheaper route to an already-open cell: requeue under the
                // new score. `seq` keeps its tie-break identity, and `h`
                // depends only on the cell, so it carries over.
                self.frontier.remove(&self.entry(open_id));
                let node = &mut self.nodes[open_id];
                node.parent = Some(ci);
                node.g = tentative_g;
                node.f = node.g + node.h;
                self.frontier.insert(self.entry(open_id));
            }
            return;
        }

        let h = heuristic(np, goal);
        let id = self.alloc_node(np, tentative_g, h, Some(ci));
        self.open_index.insert(key, id);
        self.frontier.insert(self.entry(id));
    }
}
