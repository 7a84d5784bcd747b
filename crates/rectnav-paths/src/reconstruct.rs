//! Stitching a discovered cell chain into concrete waypoints.

use rectnav_core::{CellId, Vec2};

use crate::finder::Node;
use crate::traits::CellGraph;

/// Build the waypoint sequence for a meeting of the two frontiers.
///
/// The full cell chain is assembled by walking start-side parents from the
/// meeting cell back to the start root (reversed into root-to-meeting
/// order, the meeting cell appearing once) and then end-side parents from
/// the meeting cell to the end root. The returned path is the exact source
/// point, one boundary-constrained midpoint per consecutive cell pair of
/// the chain, and the exact destination point.
pub(crate) fn waypoints<G: CellGraph>(
    graph: &G,
    start_nodes: &[Node],
    end_nodes: &[Node],
    meeting: usize,
    source: Vec2,
    destination: Vec2,
) -> Vec<Vec2> {
    let mut chain = Vec::new();

    let mut ci = meeting;
    while ci != usize::MAX {
        chain.push(ci);
        ci = start_nodes[ci].parent;
    }
    chain.reverse();

    let mut ci = end_nodes[meeting].parent;
    while ci != usize::MAX {
        chain.push(ci);
        ci = end_nodes[ci].parent;
    }

    let mut path = Vec::with_capacity(chain.len() + 1);
    path.push(source);
    for pair in chain.windows(2) {
        // Midpoint of the overlapping interval of the two rectangles on
        // each axis: the waypoint lies on the shared boundary segment.
        let shared = graph.rect(CellId(pair[0])).intersect(graph.rect(CellId(pair[1])));
        path.push(shared.center());
    }
    path.push(destination);
    path
}
