use serde::{Serialize, Serializer};
use std::fmt::{self, Debug};
use std::hash::Hash;

/// Identity of a graph vertex
///
/// Any type with stable equality and hashing qualifies. `Debug` output is
/// used in error messages and log fields.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Vertex for T {}

/// Algorithm announced by `search_begun`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Bfs,
    Dfs,
    Dijkstra,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKind::Bfs => write!(f, "bfs"),
            SearchKind::Dfs => write!(f, "dfs"),
            SearchKind::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

/// Accumulated path cost
///
/// Every finite cost orders below `Infinite`. Finite sums are `u128`: a
/// path has fewer edges than the graph has vertices and each weight fits in
/// `u64`, so the sum cannot reach the top of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cost {
    Finite(u128),
    Infinite,
}

impl Cost {
    pub const ZERO: Cost = Cost::Finite(0);

    /// Cost of extending a path by an edge of `weight`
    pub fn plus(self, weight: u64) -> Cost {
        match self {
            Cost::Finite(c) => Cost::Finite(c.saturating_add(u128::from(weight))),
            Cost::Infinite => Cost::Infinite,
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    pub fn finite(&self) -> Option<u128> {
        match self {
            Cost::Finite(c) => Some(*c),
            Cost::Infinite => None,
        }
    }
}

impl From<u64> for Cost {
    fn from(cost: u64) -> Self {
        Cost::Finite(u128::from(cost))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(c) => write!(f, "{}", c),
            Cost::Infinite => write!(f, "inf"),
        }
    }
}

/// Finite costs serialize as numbers, `Infinite` as `null`
impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cost::Finite(c) => serializer.serialize_u128(*c),
            Cost::Infinite => serializer.serialize_none(),
        }
    }
}
