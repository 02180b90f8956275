use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Goal never reached by the search
    #[error("no path found")]
    NoPathFound,
    /// Node was never reported by the graph
    #[error("unknown node: {0}")]
    UnknownNode(String),
    /// Predecessor chain loops without reaching the start node
    #[error("predecessor chain does not lead back to the start node")]
    CorruptPredecessors,
}
