#[cfg(feature = "dot")]
pub mod dot;
pub mod error;
pub mod generator;
pub mod graph;
pub mod path;
pub mod random;
pub mod report;
pub mod search;
pub mod tracing_support;
pub mod trial;

pub use error::{Error, InvalidArgument, Result};
pub use generator::generate;
pub use graph::{Edge, Graph, NodeId, Weight};
pub use path::Path;
pub use random::RandomSource;
pub use report::{Comparison, compare};
pub use search::{SearchOutcome, Strategy, bfs, dfs, search};
pub use trial::{Trial, TrialConfig, run_trial, run_trials};
