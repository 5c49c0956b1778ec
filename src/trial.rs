use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::InvalidArgument;
use crate::generator::{generate, max_edges};
use crate::graph::Graph;
use crate::random::RandomSource;
use crate::report::{Comparison, compare};
use crate::tracing_support::info;

/// Parameters for a batch of random search comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialConfig {
    pub node_count: usize,
    pub edge_count: usize,
    /// How many graphs to generate.
    pub trials: usize,
    /// Seed for reproducible runs; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            node_count: 20,
            edge_count: 40,
            trials: 3,
            seed: None,
        }
    }
}

impl TrialConfig {
    /// Checks the parameters before any graph is generated.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        if self.node_count < 2 {
            return Err(InvalidArgument::TooFewNodes {
                nodes: self.node_count,
                required: 2,
            });
        }
        let max = max_edges(self.node_count);
        if self.edge_count > max {
            return Err(InvalidArgument::TooManyEdges {
                nodes: self.node_count,
                requested: self.edge_count,
                max,
            });
        }
        Ok(())
    }
}

/// One generated graph and the comparison run on it.
#[derive(Debug, Clone)]
pub struct Trial {
    /// 1-based position in the batch.
    pub number: usize,
    pub graph: Graph,
    pub comparison: Comparison,
}

/// Generates a graph, picks two distinct random nodes and compares the
/// searches between them.
pub fn run_trial<R>(config: &TrialConfig, rng: &mut R) -> Result<(Graph, Comparison), InvalidArgument>
where
    R: RandomSource + ?Sized,
{
    config.validate()?;
    let graph = generate(config.node_count, config.edge_count, rng)?;
    let ends = rng.sample_distinct(0..config.node_count, 2);
    let comparison = compare(&graph, ends[0], ends[1])?;
    Ok((graph, comparison))
}

/// Runs `config.trials` trials with one random source for the whole batch.
pub fn run_trials(config: &TrialConfig) -> Result<Vec<Trial>, InvalidArgument> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (1..=config.trials)
        .map(|number| -> Result<Trial, InvalidArgument> {
            let (graph, comparison) = run_trial(config, &mut rng)?;
            info!(
                trial = number,
                start = comparison.start,
                goal = comparison.goal,
                bfs_visited = comparison.bfs.visited,
                dfs_visited = comparison.dfs.visited,
                "trial complete"
            );
            Ok(Trial {
                number,
                graph,
                comparison,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> TrialConfig {
        TrialConfig {
            seed: Some(seed),
            ..TrialConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = TrialConfig::default();
        assert_eq!(config.node_count, 20);
        assert_eq!(config.edge_count, 40);
        assert_eq!(config.trials, 3);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        let config = TrialConfig {
            node_count: 1,
            edge_count: 0,
            ..TrialConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(InvalidArgument::TooFewNodes {
                nodes: 1,
                required: 2
            })
        );

        let config = TrialConfig {
            node_count: 5,
            edge_count: 11,
            ..TrialConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(InvalidArgument::TooManyEdges { max: 10, .. })
        ));
        assert!(run_trials(&config).is_err());
    }

    #[test]
    fn test_validate_accepts_huge_node_counts() {
        let config = TrialConfig {
            node_count: usize::MAX,
            edge_count: 40,
            ..TrialConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));

        let config = TrialConfig {
            node_count: usize::MAX,
            edge_count: usize::MAX,
            ..TrialConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_run_trials_shapes() {
        let trials = run_trials(&seeded(11)).unwrap();
        assert_eq!(trials.len(), 3);
        for (i, trial) in trials.iter().enumerate() {
            assert_eq!(trial.number, i + 1);
            assert_eq!(trial.graph.num_nodes(), 20);
            assert_eq!(trial.graph.num_edges(), 40);
            let comparison = &trial.comparison;
            assert_ne!(comparison.start, comparison.goal);
            assert_eq!(comparison.bfs.found(), comparison.dfs.found());
            for (_, outcome) in comparison.outcomes() {
                assert!(outcome.visited > 0);
                if let Some(path) = &outcome.path {
                    assert_eq!(path.start(), comparison.start);
                    assert_eq!(path.goal(), comparison.goal);
                    assert!(path.is_walk_in(&trial.graph));
                }
            }
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let a = run_trials(&seeded(8)).unwrap();
        let b = run_trials(&seeded(8)).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.graph, y.graph);
            assert_eq!(x.comparison, y.comparison);
        }
    }

    #[test]
    fn test_zero_trials() {
        let config = TrialConfig {
            trials: 0,
            ..seeded(1)
        };
        assert!(run_trials(&config).unwrap().is_empty());
    }
}
