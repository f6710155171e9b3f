//! Permutation operators for paths with fixed endpoints.
//!
//! A path here is a permutation of `0..n` whose first element is the start
//! node and whose last element is the end node. Every operator in this
//! module maps valid paths to valid paths.
//!
//! # Construction
//!
//! - [`shuffle`]: Fisher–Yates uniform shuffle
//! - [`random_path`]: start + shuffled interior + end
//!
//! # Crossover
//!
//! - [`prefix_order_crossover`]: keep a prefix of parent1, fill the rest in
//!   parent2's order, skipping nodes already placed
//!
//! # Mutation
//!
//! - [`interior_swap_mutation`]: exchange two interior positions — O(1)
//!
//! # References
//!
//! - Fisher & Yates (1938); Durstenfeld (1964), "Algorithm 235: Random permutation"
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

// ============================================================================
// Construction
// ============================================================================

/// Shuffles `items` in place so that every permutation is equally likely.
///
/// # Complexity
/// O(n)
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Builds a uniformly random path of `node_count` nodes from `start` to `end`.
///
/// The interior holds every other node exactly once, in shuffled order.
///
/// # Panics
/// Panics if `start` or `end` is not below `node_count`.
pub fn random_path<R: Rng>(node_count: usize, start: usize, end: usize, rng: &mut R) -> Vec<usize> {
    assert!(start < node_count && end < node_count, "endpoint out of range");

    let mut path = Vec::with_capacity(node_count);
    path.push(start);
    path.extend((0..node_count).filter(|&v| v != start && v != end));
    shuffle(&mut path[1..], rng);
    if end != start {
        path.push(end);
    }
    path
}

// ============================================================================
// Crossover
// ============================================================================

/// Prefix order crossover with repair.
///
/// # Algorithm
///
/// 1. Draw a cut `c` uniformly from `1..=n-3` (just `1` when `n < 4`)
/// 2. Copy `parent1[..c]` into the child; it always begins with the start node
/// 3. Walk `parent2` in order and append every node not yet in the child,
///    skipping the end node
/// 4. Append the end node
///
/// Skipping the end node during the walk is what keeps the child a valid
/// path; the start node is never re-added because the prefix holds it.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or fewer than two nodes.
pub fn prefix_order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "paths need at least two nodes");

    let cut = rng.random_range(1..=n.saturating_sub(3).max(1));
    build_child(parent1, parent2, cut)
}

/// Build one child: prefix `template[..cut]`, then `donor` order, then end.
fn build_child(template: &[usize], donor: &[usize], cut: usize) -> Vec<usize> {
    let n = template.len();
    let end = template[n - 1];
    let mut child = Vec::with_capacity(n);
    let mut placed = vec![false; n];

    for &node in &template[..cut] {
        child.push(node);
        placed[node] = true;
    }
    placed[end] = true;

    for &node in donor {
        if !placed[node] {
            child.push(node);
            placed[node] = true;
        }
    }

    child.push(end);
    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation restricted to interior positions.
///
/// Picks two distinct positions strictly between the first and the last and
/// exchanges them. Paths with fewer than two interior nodes are left alone.
///
/// # Complexity
/// O(1)
pub fn interior_swap_mutation<R: Rng>(path: &mut [usize], rng: &mut R) {
    let n = path.len();
    if n < 4 {
        return;
    }
    let i = rng.random_range(1..n - 1);
    let mut j = rng.random_range(1..n - 2);
    if j >= i {
        j += 1;
    }
    path.swap(i, j);
}

// ============================================================================
// Validation
// ============================================================================

/// Returns `true` if `path` visits each of `0..node_count` exactly once,
/// starting at `start` and ending at `end`.
pub fn is_valid_path(path: &[usize], node_count: usize, start: usize, end: usize) -> bool {
    if path.len() != node_count || path.first() != Some(&start) || path.last() != Some(&end) {
        return false;
    }
    let mut seen = vec![false; node_count];
    for &node in path {
        if node >= node_count || seen[node] {
            return false;
        }
        seen[node] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
