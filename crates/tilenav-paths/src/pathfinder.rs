//! The per-map [`Pathfinder`]: one cost grid plus the working set of the
//! search in flight.

use std::collections::{HashMap, HashSet};

use tilenav_grid::{CellGrid, GridError, Point};

use crate::frontier::{FrontierEntry, Node, NodeId, OrderedFrontier};

/// Stride for packing a cell coordinate into one key. Equals `OBSTACLE + 1`,
/// so every supported `y` stays below the stride and keys never collide.
pub(crate) const KEY_STRIDE: u64 = 1 << 26;

/// Packed key for a cell. Only in-bounds cells are keyed, so both
/// coordinates are non-negative here.
#[inline]
pub(crate) fn cell_key(p: Point) -> u64 {
    p.x as u64 * KEY_STRIDE + p.y as u64
}

/// Pathfinding instance for one named map.
///
/// Owns the map's [`CellGrid`] plus all transient search state. Grid
/// management ([`Pathfinder::init`], [`Pathfinder::update_region`],
/// [`Pathfinder::set_diagonals`], [`Pathfinder::clear`]) delegates to the
/// grid; [`Pathfinder::find_path`] runs a full query. The working set is
/// discarded at the end of every query, found or not, so nothing carries
/// over between searches on the same grid.
pub struct Pathfinder {
    pub(crate) grid: CellGrid,
    // Working set of one search, empty between queries.
    pub(crate) frontier: OrderedFrontier,
    pub(crate) open_index: HashMap<u64, NodeId>,
    pub(crate) closed: HashSet<u64>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) next_seq: u32,
}

impl Pathfinder {
    /// Create an instance with an uninitialized grid.
    pub fn new() -> Self {
        Self {
            grid: CellGrid::new(),
            frontier: OrderedFrontier::new(),
            open_index: HashMap::new(),
            closed: HashSet::new(),
            nodes: Vec::new(),
            next_seq: 0,
        }
    }

    /// Replace the map's entire grid. See [`CellGrid::init`].
    pub fn init(
        &mut self,
        hcells: i32,
        vcells: i32,
        data: Vec<Vec<i32>>,
        diagonals: bool,
    ) -> Result<(), GridError> {
        self.grid.init(hcells, vcells, data, diagonals)
    }

    /// Overwrite a sub-rectangle of the grid. See [`CellGrid::update_region`].
    pub fn update_region(
        &mut self,
        origin_x: i32,
        origin_y: i32,
        width: i32,
        height: i32,
        patch: &[Vec<i32>],
    ) -> Result<(), GridError> {
        self.grid
            .update_region(origin_x, origin_y, width, height, patch)
    }

    /// Enable or disable diagonal movement for subsequent queries.
    pub fn set_diagonals(&mut self, enabled: bool) {
        self.grid.set_diagonals(enabled);
    }

    /// Discard the grid's cell data. Queries report "no path" until the next
    /// [`Pathfinder::init`].
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Read access to the map's grid.
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Whether diagonal movement is enabled for this map.
    pub fn diagonals(&self) -> bool {
        self.grid.diagonals()
    }

    /// Whether the grid currently holds cell data.
    pub fn is_initialized(&self) -> bool {
        self.grid.is_initialized()
    }

    /// Allocate a node in the arena, stamping it with the next sequence
    /// number.
    pub(crate) fn alloc_node(
        &mut self,
        pos: Point,
        g: i64,
        h: i64,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = self.nodes.len();
        let seq = self.next_seq;
        self.next_seq += 1;
        self.nodes.push(Node {
            pos,
            g,
            h,
            f: g + h,
            parent,
            seq,
        });
        id
    }

    /// Frontier key for the node's current score.
    pub(crate) fn entry(&self, id: NodeId) -> FrontierEntry {
        let node = &self.nodes[id];
        FrontierEntry {
            f: node.f,
            seq: node.seq,
            node: id,
        }
    }

    /// Drop the per-search working set and reset the sequence counter. Runs
    /// at the end of every search, found or not.
    pub(crate) fn clear_search_state(&mut self) {
        self.frontier.clear();
        self.open_index.clear();
        self.closed.clear();
        self.nodes.clear();
        self.next_seq = 0;
    }
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new()
    }
}
