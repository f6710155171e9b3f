//! Truncation selection.
//!
//! The breeding pool is the best `k` individuals by fitness rank. No
//! sampling and no fitness-proportional weighting takes place; selection
//! pressure comes from the cutoff alone, and mutation compensates for the
//! diversity it removes.
//!
//! # References
//!
//! - Mühlenbein & Schlierkamp-Voosen (1993), "Predictive Models for the
//!   Breeder Genetic Algorithm"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use std::cmp::Ordering;

/// Returns the indices of the `pool_size` lowest-fitness individuals,
/// best first.
///
/// Ties keep evaluation order (the sort is stable). NaN fitness of either
/// sign ranks after every number. A `pool_size` larger than the population is capped to the
/// population size.
///
/// # Complexity
/// O(n log n)
///
/// # Examples
///
/// ```
/// use u_evopath::ga::{truncation_select, Individual};
///
/// #[derive(Clone)]
/// struct Scored(f64);
///
/// impl Individual for Scored {
///     fn fitness(&self) -> f64 { self.0 }
///     fn set_fitness(&mut self, f: f64) { self.0 = f; }
/// }
///
/// let population = vec![Scored(9.0), Scored(3.0), Scored(5.0), Scored(1.0)];
/// assert_eq!(truncation_select(&population, 2), vec![3, 1]);
/// ```
pub fn truncation_select<I: Individual>(population: &[I], pool_size: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..population.len()).collect();
    ranked.sort_by(|&a, &b| fitness_order(population[a].fitness(), population[b].fitness()));
    ranked.truncate(pool_size.min(population.len()));
    ranked
}

/// Orders fitness values lowest first, with every NaN after every number.
pub(crate) fn fitness_order(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}
