pub mod digraph;
pub mod parse;

pub use self::digraph::DiGraph;
pub use self::parse::ParseError;

use serde::{Deserialize, Serialize};

/// A full problem instance: the graph, fixed once built, and the query
/// start nodes to answer against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    pub graph: DiGraph,
    pub queries: Vec<usize>,
}
