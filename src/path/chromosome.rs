//! Path chromosome.
//!
//! A path encodes one candidate route as the full ordered list of node
//! indices, start node first and end node last.

use crate::ga::Individual;

/// An ordered visit of every node, from the start node to the end node.
///
/// The fitness value is the total edge weight along the path as of the
/// last evaluation. Lower fitness = shorter path.
///
/// # Examples
///
/// ```
/// use u_evopath::path::Path;
/// use u_evopath::ga::Individual;
///
/// let path = Path::new(vec![0, 2, 1, 3]);
/// assert_eq!(path.nodes(), &[0, 2, 1, 3]);
/// assert_eq!(path.fitness(), f64::INFINITY);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<usize>,
    length: f64,
}

impl Path {
    /// Creates an unevaluated path from a node sequence.
    pub fn new(nodes: Vec<usize>) -> Self {
        Self {
            nodes,
            length: f64::INFINITY,
        }
    }

    /// Returns the node sequence.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Returns a mutable view of the node sequence.
    ///
    /// The slice cannot change length; callers are responsible for keeping
    /// it a permutation with the original endpoints.
    pub fn nodes_mut(&mut self) -> &mut [usize] {
        &mut self.nodes
    }

    /// Consumes the path and returns its node sequence.
    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }

    /// Total edge weight from the last evaluation, infinite if never evaluated.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the path has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

impl Individual for Path {
    fn fitness(&self) -> f64 {
        self.length
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.length = fitness;
    }
}
