//! Exact search by enumeration.
//!
//! Enumerates every ordering of the interior nodes with Heap's algorithm.
//! Runs in O(k!·n) for k interior nodes, so it is only practical for small
//! graphs; it serves as ground truth for GA results.
//!
//! # Reference
//!
//! Heap, B. R. (1963). "Permutations by Interchanges", *The Computer Journal* 6(3), 293-294.

use crate::ga::Individual;

use super::chromosome::Path;
use super::problem::PathProblem;

/// Largest graph [`exhaustive_optimum`] is meant for (10! interior orderings).
pub const EXHAUSTIVE_NODE_LIMIT: usize = 12;

/// Returns a shortest path of `problem` by trying every interior ordering.
///
/// Among equally short paths the first one enumerated wins. The returned
/// path has its length set.
///
/// # Examples
///
/// ```
/// use u_evopath::graph::DistanceMatrix;
/// use u_evopath::path::{exhaustive_optimum, PathProblem};
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 2.0, 1.0, 14.0],
///     vec![7.0, 0.0, 7.0, 8.0],
///     vec![5.0, 1.0, 0.0, 2.0],
///     vec![1.0, 3.0, 5.0, 0.0],
/// ])
/// .unwrap();
/// let best = exhaustive_optimum(&PathProblem::new(dm, 0, 3).unwrap());
/// assert_eq!(best.nodes(), &[0, 2, 1, 3]);
/// assert_eq!(best.length(), 10.0);
/// ```
pub fn exhaustive_optimum(problem: &PathProblem) -> Path {
    let n = problem.node_count();
    let (start, end) = (problem.start(), problem.end());
    let distances = problem.distances();

    let mut candidate = Vec::with_capacity(n);
    candidate.push(start);
    candidate.extend((0..n).filter(|&v| v != start && v != end));
    candidate.push(end);

    let mut best = candidate.clone();
    let mut best_length = f64::INFINITY;
    for_each_ordering(&mut candidate, |ordering| {
        let length = distances.path_length(ordering);
        if length < best_length {
            best_length = length;
            best.copy_from_slice(ordering);
        }
    });

    let mut path = Path::new(best);
    path.set_fitness(best_length);
    path
}

/// Calls `visit` once for every ordering of `candidate[1..len - 1]`,
/// starting with the ordering passed in. Endpoints are never moved.
fn for_each_ordering<F: FnMut(&[usize])>(candidate: &mut [usize], mut visit: F) {
    visit(candidate);

    let k = candidate.len().saturating_sub(2);
    let mut counters = vec![0usize; k];
    let mut i = 1;
    while i < k {
        if counters[i] < i {
            let j = if i % 2 == 0 { 0 } else { counters[i] };
            candidate.swap(1 + j, 1 + i);
            visit(candidate);
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
}
