use std::ops::RangeInclusive;

use crate::error::InvalidArgument;
use crate::graph::{Graph, Weight};
use crate::random::RandomSource;
use crate::tracing_support::debug;

/// Weights given to generated edges.
pub const WEIGHT_RANGE: RangeInclusive<Weight> = 1..=10;

/// The number of distinct undirected edges possible between `node_count`
/// nodes without self-loops.  Saturates at `usize::MAX` when the count does
/// not fit, which no requested edge count can exceed.
pub fn max_edges(node_count: usize) -> usize {
    let (half, other) = if node_count % 2 == 0 {
        (node_count / 2, node_count.saturating_sub(1))
    } else {
        ((node_count - 1) / 2, node_count)
    };
    half.checked_mul(other).unwrap_or(usize::MAX)
}

/// Generates a random simple graph with exactly `node_count` nodes and
/// `edge_count` distinct edges, each with a weight drawn from
/// [`WEIGHT_RANGE`].
///
/// Edges are placed by drawing two distinct nodes at a time and keeping the
/// pair if it is not connected yet, so the expected number of draws grows
/// quickly as `edge_count` approaches [`max_edges`].  Intended for small
/// graphs.
pub fn generate<R>(node_count: usize, edge_count: usize, rng: &mut R) -> Result<Graph, InvalidArgument>
where
    R: RandomSource + ?Sized,
{
    if node_count == 0 {
        return Err(InvalidArgument::EmptyGraph);
    }
    let max = max_edges(node_count);
    if edge_count > max {
        return Err(InvalidArgument::TooManyEdges {
            nodes: node_count,
            requested: edge_count,
            max,
        });
    }

    let mut graph = Graph::new(node_count);
    let mut draws = 0usize;
    while graph.num_edges() < edge_count {
        draws += 1;
        let pair = rng.sample_distinct(0..node_count, 2);
        let (u, v) = (pair[0], pair[1]);
        if !graph.has_edge(u, v) {
            let weight = rng.int_in_range(WEIGHT_RANGE);
            graph.add_edge(u, v, weight)?;
        }
    }
    debug!(node_count, edge_count, draws, "generated random graph");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};
    use std::ops::Range;

    use quickcheck_macros::quickcheck;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    /// Replays fixed draws so tests can control exactly which pairs come up.
    struct ScriptedSource {
        pairs: VecDeque<(usize, usize)>,
        weights: VecDeque<u32>,
    }

    impl RandomSource for ScriptedSource {
        fn sample_distinct(&mut self, _range: Range<usize>, amount: usize) -> Vec<usize> {
            assert_eq!(amount, 2);
            let (u, v) = self.pairs.pop_front().expect("ran out of scripted pairs");
            vec![u, v]
        }

        fn int_in_range(&mut self, range: RangeInclusive<u32>) -> u32 {
            let weight = self.weights.pop_front().expect("ran out of scripted weights");
            assert!(range.contains(&weight));
            weight
        }
    }

    #[test]
    fn test_max_edges() {
        assert_eq!(max_edges(0), 0);
        assert_eq!(max_edges(1), 0);
        assert_eq!(max_edges(2), 1);
        assert_eq!(max_edges(20), 190);
        assert_eq!(max_edges(21), 210);
    }

    #[test]
    fn test_max_edges_saturates_for_huge_node_counts() {
        assert_eq!(max_edges(usize::MAX), usize::MAX);
        assert_eq!(max_edges(usize::MAX - 1), usize::MAX);
        #[cfg(target_pointer_width = "64")]
        {
            assert_eq!(max_edges(1 << 20), (1 << 19) * ((1 << 20) - 1));
            assert_eq!(max_edges(1 << 33), usize::MAX);
        }
    }

    #[test]
    fn test_generate_exact_counts() {
        let mut rng = StdRng::seed_from_u64(2024);
        let graph = generate(20, 40, &mut rng).unwrap();
        assert_eq!(graph.num_nodes(), 20);
        assert_eq!(graph.num_edges(), 40);
    }

    #[test]
    fn test_generate_complete_graph() {
        let mut rng = StdRng::seed_from_u64(5);
        let graph = generate(6, 15, &mut rng).unwrap();
        for u in 0..6 {
            for v in (u + 1)..6 {
                assert!(graph.has_edge(u, v));
            }
        }
    }

    #[test]
    fn test_generate_without_edges() {
        let mut rng = StdRng::seed_from_u64(0);
        let graph = generate(1, 0, &mut rng).unwrap();
        assert_eq!(graph.num_nodes(), 1);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_generate_rejects_too_many_edges() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate(4, 7, &mut rng),
            Err(InvalidArgument::TooManyEdges {
                nodes: 4,
                requested: 7,
                max: 6
            })
        );
        assert!(matches!(
            generate(1, 1, &mut rng),
            Err(InvalidArgument::TooManyEdges { max: 0, .. })
        ));
    }

    #[test]
    fn test_generate_rejects_empty_graph() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generate(0, 0, &mut rng), Err(InvalidArgument::EmptyGraph));
    }

    #[test]
    fn test_generate_skips_existing_pairs() {
        let mut source = ScriptedSource {
            pairs: VecDeque::from([(0, 1), (1, 0), (2, 1), (0, 1), (3, 0)]),
            weights: VecDeque::from([4, 9, 2]),
        };
        let graph = generate(4, 3, &mut source).unwrap();
        let edges: Vec<_> = graph.edges().map(|e| (e.ends(), e.weight())).collect();
        assert_eq!(edges, vec![((0, 1), 4), ((2, 1), 9), ((3, 0), 2)]);
        assert!(source.pairs.is_empty());
        assert!(source.weights.is_empty());
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = generate(20, 40, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate(20, 40, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[quickcheck]
    fn prop_generated_graph_is_simple(seed: u64, nodes: u8, edges: u8) -> bool {
        let node_count = usize::from(nodes % 15) + 1;
        let edge_count = usize::from(edges) % (max_edges(node_count) + 1);
        let graph = match generate(node_count, edge_count, &mut StdRng::seed_from_u64(seed)) {
            Ok(graph) => graph,
            Err(_) => return false,
        };

        let mut seen = HashSet::new();
        graph.num_nodes() == node_count
            && graph.num_edges() == edge_count
            && graph.edges().all(|edge| {
                let (u, v) = edge.ends();
                u != v
                    && u < node_count
                    && v < node_count
                    && WEIGHT_RANGE.contains(&edge.weight())
                    && seen.insert((u.min(v), u.max(v)))
            })
    }
}
