use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::heap::Heap;

/// Optimal total cost and the full node sequence from start to goal
/// inclusive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<N> {
    pub cost: f64,
    pub path: Vec<N>,
}

struct OpenEntry<N, K> {
    node: N,
    key: K,
    f: f64,
}

/// Finds the minimum-cost path from `start` to `goal` using best-first
/// search (A*), or `None` when the goal is unreachable.
///
/// The graph is implicit: `neighbors` returns the forward edges of a node
/// as `(neighbor, edge_cost)` pairs and is only called on demand, so the
/// graph may be unbounded. Edge costs must be non-negative. `heuristic`
/// estimates the remaining cost to `goal`; it must never overestimate for
/// the returned cost to be optimal, and the zero heuristic degrades the
/// search to Dijkstra. `key` maps a node to the identity used for all
/// deduplication, so two node values representing the same vertex must
/// map to equal keys.
///
/// Duplicate open-set entries per identity are allowed and discarded when
/// popped after that identity has been closed, which avoids a
/// decrease-key operation on the heap.
pub fn shortest_path<N, K, FN, FH, FK>(
    start: N,
    goal: N,
    mut neighbors: FN,
    mut heuristic: FH,
    mut key: FK,
) -> Option<SearchResult<N>>
where
    N: Clone,
    K: Eq + Hash + Clone,
    FN: FnMut(&N) -> Vec<(N, f64)>,
    FH: FnMut(&N) -> f64,
    FK: FnMut(&N) -> K,
{
    let goal_key = key(&goal);
    let start_key = key(&start);

    let mut g_score: HashMap<K, f64> = HashMap::new();
    g_score.insert(start_key.clone(), 0.0);

    // Per-identity predecessor records for path reconstruction; the start
    // has no predecessor.
    let mut came_from: HashMap<K, (N, Option<K>)> = HashMap::new();
    came_from.insert(start_key.clone(), (start.clone(), None));

    let f0 = heuristic(&start);
    let mut open = Heap::new(|a: &OpenEntry<N, K>, b: &OpenEntry<N, K>| a.f < b.f);
    open.push(OpenEntry { node: start, key: start_key, f: f0 });

    let mut closed: HashSet<K> = HashSet::new();
    let mut expanded: u64 = 0;

    while let Some(current) = open.pop() {
        if current.key == goal_key {
            let cost = g_score[&current.key];
            let mut path = Vec::new();
            let mut k = Some(current.key);
            while let Some(cur) = k {
                let (node, parent) = came_from
                    .get(&cur)
                    .expect("missing predecessor record for reached node");
                path.push(node.clone());
                k = parent.clone();
            }
            path.reverse();
            debug!(expanded, cost, path_len = path.len(), "shortest_path done");
            return Some(SearchResult { cost, path });
        }

        // Stale duplicate of an already finalized identity.
        if !closed.insert(current.key.clone()) {
            continue;
        }
        expanded += 1;

        let current_g = g_score[&current.key];
        for (neighbor, edge_cost) in neighbors(&current.node) {
            let nk = key(&neighbor);
            if closed.contains(&nk) {
                continue;
            }
            let tentative_g = current_g + edge_cost;
            if tentative_g < g_score.get(&nk).copied().unwrap_or(f64::INFINITY) {
                g_score.insert(nk.clone(), tentative_g);
                came_from.insert(nk.clone(), (neighbor.clone(), Some(current.key.clone())));
                let f = tentative_g + heuristic(&neighbor);
                open.push(OpenEntry { node: neighbor, key: nk, f });
            }
        }
    }

    debug!(expanded, "shortest_path exhausted frontier");
    None
}
