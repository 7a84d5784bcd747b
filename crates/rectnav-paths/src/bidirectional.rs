//! Bidirectional best-first search over cell adjacency.
//!
//! Two frontiers run simultaneously, one rooted at the source cell biased
//! toward the destination point, one rooted at the destination cell biased
//! toward the source point, until one pops a cell the other has already
//! visited. Edge costs and heuristics are Euclidean distances between cell
//! centers.

use std::collections::BinaryHeap;

use rectnav_core::{CellId, Vec2};

use crate::distance::euclidean;
use crate::finder::{HeapRef, Node, PathError, PathFinder, SearchOutcome};
use crate::locate::locate;
use crate::reconstruct::waypoints;
use crate::traits::CellGraph;

/// What one frontier step produced.
enum Step {
    /// The popped cell is already visited by the opposite frontier.
    Met(usize),
    /// The frontier expanded one cell.
    Expanded,
    /// The frontier's queue is exhausted: no path exists.
    Exhausted,
}

impl PathFinder {
    /// Search for a path from `source` to `destination` through `graph`.
    ///
    /// On success the path starts at the exact source point, ends at the
    /// exact destination point, and places one boundary-constrained midpoint
    /// on every shared edge of the discovered cell chain. The outcome also
    /// carries every cell either frontier visited, in discovery order.
    ///
    /// Two approximations are inherent and preserved deliberately: costs
    /// are center-to-center distances rather than true traversal cost, and
    /// the frontiers are not cost-balanced — the first cell seen by both
    /// sides is accepted as the meeting point. The result is a feasible
    /// path, not necessarily the globally shortest one.
    pub fn find_path<G: CellGraph>(
        &mut self,
        graph: &G,
        source: Vec2,
        destination: Vec2,
    ) -> SearchOutcome {
        let cells = graph.cell_count();
        if cells != self.capacity {
            self.set_capacity(cells);
        }

        // Bump generation to lazily invalidate both arenas.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        let Some(start) = locate(graph, source) else {
            log::debug!("source {source} outside every cell");
            return SearchOutcome {
                result: Err(PathError::UnresolvedSource),
                explored: Vec::new(),
            };
        };
        let Some(end) = locate(graph, destination) else {
            log::debug!("destination {destination} outside every cell");
            return SearchOutcome {
                result: Err(PathError::UnresolvedDestination),
                explored: Vec::new(),
            };
        };

        let mut explored = Vec::new();
        self.explored_mark[start.0] = cur_gen;
        explored.push(start);

        if start == end {
            log::trace!("endpoints share cell {start:?}");
            return SearchOutcome {
                result: Ok(vec![source, destination]),
                explored,
            };
        }

        self.explored_mark[end.0] = cur_gen;
        explored.push(end);

        // Seed both roots at priority equal to their heuristic.
        {
            let n = &mut self.start_nodes[start.0];
            n.g = 0.0;
            n.f = euclidean(graph.center(start), destination);
            n.parent = usize::MAX;
            n.generation = cur_gen;
            n.open = true;
        }
        {
            let n = &mut self.end_nodes[end.0];
            n.g = 0.0;
            n.f = euclidean(graph.center(end), source);
            n.parent = usize::MAX;
            n.generation = cur_gen;
            n.open = true;
        }

        let mut start_open: BinaryHeap<HeapRef> = BinaryHeap::new();
        start_open.push(HeapRef {
            idx: start.0,
            f: self.start_nodes[start.0].f,
        });
        let mut end_open: BinaryHeap<HeapRef> = BinaryHeap::new();
        end_open.push(HeapRef {
            idx: end.0,
            f: self.end_nodes[end.0].f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        // One step per side per iteration, start side first.
        let meeting = 'search: loop {
            match step(
                graph,
                &mut self.start_nodes,
                &self.end_nodes,
                &mut start_open,
                destination,
                cur_gen,
                &mut nbuf,
                &mut self.explored_mark,
                &mut explored,
            ) {
                Step::Met(ci) => break 'search Some(ci),
                Step::Exhausted => break 'search None,
                Step::Expanded => {}
            }
            match step(
                graph,
                &mut self.end_nodes,
                &self.start_nodes,
                &mut end_open,
                source,
                cur_gen,
                &mut nbuf,
                &mut self.explored_mark,
                &mut explored,
            ) {
                Step::Met(ci) => break 'search Some(ci),
                Step::Exhausted => break 'search None,
                Step::Expanded => {}
            }
        };

        self.nbuf = nbuf;

        let Some(meeting) = meeting else {
            log::debug!(
                "no path: frontier exhausted after exploring {} cells",
                explored.len()
            );
            return SearchOutcome {
                result: Err(PathError::NoPath),
                explored,
            };
        };

        log::trace!("frontiers met at cell {meeting}");
        let path = waypoints(
            graph,
            &self.start_nodes,
            &self.end_nodes,
            meeting,
            source,
            destination,
        );
        log::debug!(
            "path found: {} waypoints, {} cells explored",
            path.len(),
            explored.len()
        );
        SearchOutcome {
            result: Ok(path),
            explored,
        }
    }
}

/// Advance one frontier by one expansion.
///
/// `own` is the stepping side's arena, `other` the opposite side's; `target`
/// is the external point this side's heuristic aims at.
#[allow(clippy::too_many_arguments)]
fn step<G: CellGraph>(
    graph: &G,
    own: &mut [Node],
    other: &[Node],
    open: &mut BinaryHeap<HeapRef>,
    target: Vec2,
    cur_gen: u32,
    nbuf: &mut Vec<CellId>,
    explored_mark: &mut [u32],
    explored: &mut Vec<CellId>,
) -> Step {
    loop {
        let Some(current) = open.pop() else {
            return Step::Exhausted;
        };
        let ci = current.idx;

        // Skip stale entries.
        if own[ci].generation != cur_gen || !own[ci].open {
            continue;
        }

        // Meeting test: the first cell the opposite side has also visited
        // ends the search, whether or not it is the cost-minimal meeting.
        if other[ci].generation == cur_gen {
            return Step::Met(ci);
        }

        own[ci].open = false;
        let current_g = own[ci].g;
        let cp = graph.center(CellId(ci));

        nbuf.clear();
        graph.neighbors(CellId(ci), nbuf);

        for &nb in nbuf.iter() {
            if nb.0 >= own.len() {
                continue;
            }
            let ncenter = graph.center(nb);
            let tentative = current_g + euclidean(cp, ncenter);

            let n = &mut own[nb.0];
            let first_visit = n.generation != cur_gen;
            if !first_visit && tentative >= n.g {
                continue;
            }

            n.generation = cur_gen;
            n.g = tentative;
            n.f = tentative + euclidean(ncenter, target);
            n.parent = ci;
            n.open = true;
            open.push(HeapRef { idx: nb.0, f: n.f });

            if first_visit && explored_mark[nb.0] != cur_gen {
                explored_mark[nb.0] = cur_gen;
                explored.push(nb);
            }
        }

        return Step::Expanded;
    }
}
