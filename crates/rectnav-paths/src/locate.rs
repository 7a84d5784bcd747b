use rectnav_core::{CellId, Vec2};

use crate::traits::CellGraph;

/// Find the cell containing `p`, with inclusive bound comparisons.
///
/// Cells are scanned in id order and the first hit wins, so a point lying
/// exactly on a shared boundary resolves to the cell that was added to the
/// mesh first. Returns `None` when no cell contains the point.
pub fn locate<G: CellGraph>(graph: &G, p: Vec2) -> Option<CellId> {
    (0..graph.cell_count())
        .map(CellId)
        .find(|&id| graph.rect(id).contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rectnav_core::{Mesh, MeshBuilder, Rect};

    fn two_squares() -> (Mesh, CellId, CellId) {
        let mut b = MeshBuilder::new();
        let left = b.add_cell(Rect::new(0.0, 0.0, 1.0, 1.0));
        let right = b.add_cell(Rect::new(1.0, 0.0, 2.0, 1.0));
        b.connect(left, right);
        (b.build(), left, right)
    }

    #[test]
    fn interior_points_resolve_to_their_cell() {
        let (mesh, left, right) = two_squares();
        assert_eq!(locate(&mesh, Vec2::new(0.5, 0.5)), Some(left));
        assert_eq!(locate(&mesh, Vec2::new(1.7, 0.2)), Some(right));
    }

    #[test]
    fn shared_boundary_resolves_to_first_added_cell() {
        let (mesh, left, _) = two_squares();
        assert_eq!(locate(&mesh, Vec2::new(1.0, 0.5)), Some(left));
    }

    #[test]
    fn outside_points_resolve_to_none() {
        let (mesh, _, _) = two_squares();
        assert_eq!(locate(&mesh, Vec2::new(5.0, 5.0)), None);
        assert_eq!(locate(&mesh, Vec2::new(-0.1, 0.5)), None);
    }
}
