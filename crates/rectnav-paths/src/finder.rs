use std::fmt;

use rectnav_core::{CellId, Vec2};

// ---------------------------------------------------------------------------
// Internal node for the two best-first frontiers
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            f: 0.0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into a node arena, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy)]
pub(crate) struct HeapRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
}

impl PartialEq for HeapRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapRef {}

impl Ord for HeapRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first. Priorities
        // are finite sums of distances, never NaN. Ties break on the lower
        // cell index so expansion order is fully determined.
        other
            .f
            .partial_cmp(&self.f)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for HeapRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Query results
// ---------------------------------------------------------------------------

/// Why a query produced no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathError {
    /// The source point lies outside every cell of the mesh.
    UnresolvedSource,
    /// The destination point lies outside every cell of the mesh.
    UnresolvedDestination,
    /// Both endpoints resolved to cells, but no adjacency chain connects
    /// them.
    NoPath,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::UnresolvedSource => write!(f, "source point outside the mesh"),
            PathError::UnresolvedDestination => {
                write!(f, "destination point outside the mesh")
            }
            PathError::NoPath => write!(f, "no path between the endpoints"),
        }
    }
}

impl std::error::Error for PathError {}

/// The result of one path query.
///
/// `result` carries the waypoint sequence on success and the failure cause
/// otherwise; `explored` lists every cell either frontier visited, in
/// discovery order, for diagnostics or visualization by the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub result: Result<Vec<Vec2>, PathError>,
    pub explored: Vec<CellId>,
}

impl SearchOutcome {
    /// The waypoints of the found path, or an empty slice when none exists.
    pub fn path(&self) -> &[Vec2] {
        self.result.as_deref().unwrap_or(&[])
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        self.result.is_ok()
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Reusable coordinator for bidirectional path queries.
///
/// `PathFinder` owns the per-cell search arenas for both frontiers plus the
/// shared scratch buffers, lazily invalidated by a generation stamp, so
/// repeated queries incur no allocations beyond the returned results.
/// One finder serves one query at a time; distinct finders may query the
/// same mesh concurrently.
pub struct PathFinder {
    pub(crate) capacity: usize,
    pub(crate) start_nodes: Vec<Node>,
    pub(crate) end_nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) explored_mark: Vec<u32>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<CellId>,
}

impl PathFinder {
    /// Create a new `PathFinder` sized for a mesh with `capacity` cells.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            start_nodes: vec![Node::default(); capacity],
            end_nodes: vec![Node::default(); capacity],
            generation: 0,
            explored_mark: vec![0; capacity],
            nbuf: Vec::with_capacity(8),
        }
    }

    /// The cell count the finder is currently sized for.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Resize for a mesh with `capacity` cells, reallocating as needed.
    ///
    /// If the new size fits within existing capacity, the arenas are
    /// preserved and only the generation counter is bumped so stale entries
    /// are ignored. Otherwise the arenas are reallocated.
    /// [`find_path`](Self::find_path) calls this automatically when the
    /// graph's cell count differs.
    pub fn set_capacity(&mut self, capacity: usize) {
        if capacity <= self.start_nodes.len() {
            self.capacity = capacity;
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.capacity = capacity;

        self.start_nodes.clear();
        self.start_nodes.resize(capacity, Node::default());
        self.end_nodes.clear();
        self.end_nodes.resize(capacity, Node::default());
        self.explored_mark.clear();
        self.explored_mark.resize(capacity, 0);
        self.generation = 0;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathFinder {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.capacity.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathFinder {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let capacity = usize::deserialize(deserializer)?;
        Ok(PathFinder::new(capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_capacity_smaller_preserves_arenas() {
        let mut finder = PathFinder::new(100);
        let original = finder.start_nodes.len();

        finder.set_capacity(10);
        assert_eq!(finder.capacity(), 10);
        assert_eq!(finder.start_nodes.len(), original);
        assert_eq!(finder.end_nodes.len(), original);
        // Generation bumped so stale entries are ignored.
        assert!(finder.generation > 0);
    }

    #[test]
    fn set_capacity_larger_reallocates() {
        let mut finder = PathFinder::new(10);
        finder.set_capacity(50);
        assert_eq!(finder.capacity(), 50);
        assert_eq!(finder.start_nodes.len(), 50);
        assert_eq!(finder.end_nodes.len(), 50);
        assert_eq!(finder.explored_mark.len(), 50);
    }

    #[test]
    fn set_capacity_equal_preserves_arenas() {
        let mut finder = PathFinder::new(25);
        finder.set_capacity(25);
        assert_eq!(finder.capacity(), 25);
        assert_eq!(finder.start_nodes.len(), 25);
    }

    #[test]
    fn heap_ref_orders_smallest_first() {
        use std::collections::BinaryHeap;

        let mut heap = BinaryHeap::new();
        heap.push(HeapRef { idx: 0, f: 3.5 });
        heap.push(HeapRef { idx: 1, f: 1.25 });
        heap.push(HeapRef { idx: 2, f: 2.0 });
        assert_eq!(heap.pop().unwrap().idx, 1);
        assert_eq!(heap.pop().unwrap().idx, 2);
        assert_eq!(heap.pop().unwrap().idx, 0);
    }

    #[test]
    fn heap_ref_ties_break_on_lower_index() {
        use std::collections::BinaryHeap;

        let mut heap = BinaryHeap::new();
        heap.push(HeapRef { idx: 7, f: 1.0 });
        heap.push(HeapRef { idx: 3, f: 1.0 });
        heap.push(HeapRef { idx: 5, f: 1.0 });
        assert_eq!(heap.pop().unwrap().idx, 3);
        assert_eq!(heap.pop().unwrap().idx, 5);
        assert_eq!(heap.pop().unwrap().idx, 7);
    }
}
