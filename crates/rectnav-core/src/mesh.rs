//! The navigation-mesh model: [`CellId`], [`Mesh`] and [`MeshBuilder`].

use crate::geom::{Rect, Vec2};

/// Stable index of a cell within its [`Mesh`], assigned at construction.
///
/// Search state is keyed by this index rather than by the cell's
/// floating-point bounds, so cell identity is exact and cheap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CellId(pub usize);

/// An immutable set of rectangular cells plus their adjacency relation.
///
/// Cells keep the order they were added in; that order decides which cell a
/// boundary point resolves to when several cells touch it. The mesh assumes
/// — and does not verify — that adjacency is symmetric and references only
/// cells it owns; [`MeshBuilder`] maintains both by construction, while
/// [`Mesh::from_parts`] trusts the caller.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh {
    cells: Vec<Rect>,
    adjacency: Vec<Vec<CellId>>,
}

impl Mesh {
    /// Assemble a mesh from raw parts.
    ///
    /// `adjacency` is parallel to `cells`; it is truncated or padded with
    /// empty neighbor lists to match the cell count.
    pub fn from_parts(cells: Vec<Rect>, mut adjacency: Vec<Vec<CellId>>) -> Self {
        adjacency.resize(cells.len(), Vec::new());
        Self { cells, adjacency }
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the mesh has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The rectangle of a cell. `id` must come from this mesh.
    #[inline]
    pub fn rect(&self, id: CellId) -> Rect {
        self.cells[id.0]
    }

    /// The representative point (geometric center) of a cell.
    #[inline]
    pub fn center(&self, id: CellId) -> Vec2 {
        self.cells[id.0].center()
    }

    /// The neighbors of a cell.
    #[inline]
    pub fn neighbors(&self, id: CellId) -> &[CellId] {
        &self.adjacency[id.0]
    }

    /// Iterate over all cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, Rect)> + '_ {
        self.cells.iter().enumerate().map(|(i, &r)| (CellId(i), r))
    }
}

/// Incremental construction of a conforming [`Mesh`].
///
/// [`connect`](Self::connect) records adjacency in both directions, so a
/// built mesh always satisfies the symmetry invariant the search relies on.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    cells: Vec<Rect>,
    adjacency: Vec<Vec<CellId>>,
}

impl MeshBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell and return its id.
    pub fn add_cell(&mut self, rect: Rect) -> CellId {
        let id = CellId(self.cells.len());
        self.cells.push(rect);
        self.adjacency.push(Vec::new());
        id
    }

    /// Record that `a` and `b` share a traversable boundary.
    ///
    /// Both directions are recorded; duplicate edges and self-edges are
    /// ignored. The ids must come from [`add_cell`](Self::add_cell).
    pub fn connect(&mut self, a: CellId, b: CellId) {
        if a == b {
            return;
        }
        if !self.adjacency[a.0].contains(&b) {
            self.adjacency[a.0].push(b);
        }
        if !self.adjacency[b.0].contains(&a) {
            self.adjacency[b.0].push(a);
        }
    }

    /// Finish construction.
    pub fn build(self) -> Mesh {
        Mesh {
            cells: self.cells,
            adjacency: self.adjacency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_squares() -> (Mesh, CellId, CellId) {
        let mut b = MeshBuilder::new();
        let left = b.add_cell(Rect::new(0.0, 0.0, 1.0, 1.0));
        let right = b.add_cell(Rect::new(1.0, 0.0, 2.0, 1.0));
        b.connect(left, right);
        (b.build(), left, right)
    }

    #[test]
    fn builder_connect_is_symmetric() {
        let (mesh, left, right) = two_squares();
        assert_eq!(mesh.neighbors(left), &[right]);
        assert_eq!(mesh.neighbors(right), &[left]);
    }

    #[test]
    fn builder_ignores_duplicate_and_self_edges() {
        let mut b = MeshBuilder::new();
        let a = b.add_cell(Rect::new(0.0, 0.0, 1.0, 1.0));
        let c = b.add_cell(Rect::new(1.0, 0.0, 2.0, 1.0));
        b.connect(a, c);
        b.connect(c, a);
        b.connect(a, a);
        let mesh = b.build();
        assert_eq!(mesh.neighbors(a), &[c]);
        assert_eq!(mesh.neighbors(c), &[a]);
    }

    #[test]
    fn from_parts_pads_missing_adjacency() {
        let cells = vec![
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(1.0, 0.0, 2.0, 1.0),
        ];
        let mesh = Mesh::from_parts(cells, vec![vec![CellId(1)]]);
        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.neighbors(CellId(0)), &[CellId(1)]);
        assert!(mesh.neighbors(CellId(1)).is_empty());
    }

    #[test]
    fn iter_yields_cells_in_insertion_order() {
        let (mesh, left, right) = two_squares();
        let ids: Vec<_> = mesh.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![left, right]);
        assert_eq!(mesh.center(left), Vec2::new(0.5, 0.5));
        assert_eq!(mesh.center(right), Vec2::new(1.5, 0.5));
    }
}
