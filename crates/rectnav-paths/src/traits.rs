use rectnav_core::{CellId, Mesh, Rect, Vec2};

/// Graph interface over a cell mesh: enumerable cells plus adjacency lookup.
///
/// Ids range over `0..cell_count()`. Neighbors outside that range are
/// skipped by the search (a malformed graph degrades, it does not panic).
pub trait CellGraph {
    /// Number of cells in the graph.
    fn cell_count(&self) -> usize;

    /// The rectangle of `cell`.
    fn rect(&self, cell: CellId) -> Rect;

    /// Append the neighbors of `cell` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, cell: CellId, buf: &mut Vec<CellId>);

    /// Representative point of `cell`, used for edge costs and heuristic
    /// estimates.
    #[inline]
    fn center(&self, cell: CellId) -> Vec2 {
        self.rect(cell).center()
    }
}

impl CellGraph for Mesh {
    #[inline]
    fn cell_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn rect(&self, cell: CellId) -> Rect {
        Mesh::rect(self, cell)
    }

    fn neighbors(&self, cell: CellId, buf: &mut Vec<CellId>) {
        buf.extend_from_slice(Mesh::neighbors(self, cell));
    }
}
