//! Native search tracing.
//!
//! When [`super::SearchConfig::trace`] is set, the search records the tree
//! it actually explored — candidate, score, and whether the branch caused
//! a cutoff — and returns it alongside the chosen move. Serializable, so
//! tooling can render it without reaching into search internals.

use serde::{Deserialize, Serialize};

use crate::round::Move;

/// One explored branch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceNode {
    pub mv: Move,

    /// Backed-up score for this branch, from the AI's perspective.
    pub score: f64,

    /// True when this branch triggered an alpha-beta cutoff; its siblings
    /// after it were never explored.
    pub caused_cutoff: bool,

    pub children: Vec<TraceNode>,
}

/// The explored tree for one search call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchTrace {
    /// Root candidates in exploration order.
    pub root: Vec<TraceNode>,
}

impl SearchTrace {
    /// Number of nodes in the trace.
    #[must_use]
    pub fn len(&self) -> usize {
        fn count(nodes: &[TraceNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.children)).sum()
        }
        count(&self.root)
    }

    /// True when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}
