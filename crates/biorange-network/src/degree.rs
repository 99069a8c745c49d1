//! Degree ranking over an undirected simple graph
//!
//! Duplicate edges collapse, direction is ignored, and a node's degree is
//! its count of distinct neighbours. Ranking is descending by degree with
//! ties kept in first-encounter order (node1 before node2, edge by edge).

use biorange_common::types::{DegreeEntry, Edge, InteractionRow};
use std::collections::{HashMap, HashSet};

/// Number of core targets the concentric core-target layout is built from
pub const DEFAULT_CORE_TARGETS: usize = 274;

/// Nodes in first-encounter order with their neighbour sets
#[derive(Default)]
struct Adjacency<'a> {
    index: HashMap<&'a str, usize>,
    order: Vec<&'a str>,
    neighbours: Vec<HashSet<&'a str>>,
}

impl<'a> Adjacency<'a> {
    fn slot(&mut self, node: &'a str) -> usize {
        if let Some(&i) = self.index.get(node) {
            return i;
        }
        self.order.push(node);
        self.neighbours.push(HashSet::new());
        let i = self.order.len() - 1;
        self.index.insert(node, i);
        i
    }
}

/// Compute and rank node degrees for `edges`
pub fn compute_degrees(edges: &[Edge]) -> Vec<DegreeEntry> {
    rank(edges.iter().map(|e| (e.node1.as_str(), e.node2.as_str())))
}

/// Same as [`compute_degrees`], over raw interaction rows
pub fn interaction_degrees(interactions: &[InteractionRow]) -> Vec<DegreeEntry> {
    rank(
        interactions
            .iter()
            .map(|r| (r.preferred_name_a.as_str(), r.preferred_name_b.as_str())),
    )
}

fn rank<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> Vec<DegreeEntry> {
    let mut graph = Adjacency::default();
    for (a, b) in pairs {
        let ia = graph.slot(a);
        let ib = graph.slot(b);
        graph.neighbours[ia].insert(b);
        graph.neighbours[ib].insert(a);
    }

    let Adjacency {
        order, neighbours, ..
    } = graph;

    let mut entries: Vec<DegreeEntry> = order
        .iter()
        .zip(&neighbours)
        .map(|(node, adjacent)| DegreeEntry::new(*node, adjacent.len()))
        .collect();

    // Vec::sort_by is stable
    entries.sort_by(|x, y| y.degree.cmp(&x.degree));
    entries
}

/// The `n` highest-ranked nodes (all of them when fewer than `n`)
pub fn top_nodes(ranked: &[DegreeEntry], n: usize) -> &[DegreeEntry] {
    &ranked[..n.min(ranked.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
        pairs.iter().map(|(a, b)| Edge::new(*a, *b)).collect()
    }

    #[test]
    fn test_triangle_ties_keep_first_seen_order() {
        let ranked = compute_degrees(&edges(&[("A", "B"), ("B", "C"), ("A", "C")]));
        assert_eq!(
            ranked,
            vec![
                DegreeEntry::new("A", 2),
                DegreeEntry::new("B", 2),
                DegreeEntry::new("C", 2),
            ]
        );
    }

    #[test]
    fn test_duplicate_and_reversed_edges_collapse() {
        let ranked = compute_degrees(&edges(&[
            ("TP53", "AKT1"),
            ("AKT1", "TP53"),
            ("TP53", "AKT1"),
            ("TP53", "EGFR"),
        ]));
        assert_eq!(
            ranked,
            vec![
                DegreeEntry::new("TP53", 2),
                DegreeEntry::new("AKT1", 1),
                DegreeEntry::new("EGFR", 1),
            ]
        );
    }

    #[test]
    fn test_sorted_descending() {
        let ranked = compute_degrees(&edges(&[
            ("X", "HUB"),
            ("Y", "HUB"),
            ("Z", "HUB"),
            ("X", "Y"),
        ]));
        assert_eq!(ranked[0], DegreeEntry::new("HUB", 3));
        assert_eq!(ranked[1], DegreeEntry::new("X", 2));
        assert_eq!(ranked[2], DegreeEntry::new("Y", 2));
        assert_eq!(ranked[3], DegreeEntry::new("Z", 1));
    }

    #[test]
    fn test_self_loop_counts_node_once() {
        let ranked = compute_degrees(&edges(&[("A", "A"), ("A", "B")]));
        assert_eq!(ranked, vec![DegreeEntry::new("A", 2), DegreeEntry::new("B", 1)]);
    }

    #[test]
    fn test_empty_edges() {
        assert!(compute_degrees(&[]).is_empty());
    }

    #[test]
    fn test_interaction_degrees_match_edge_degrees() {
        let rows = vec![InteractionRow::new("A", "B"), InteractionRow::new("B", "C")];
        let as_edges: Vec<Edge> = rows.iter().map(InteractionRow::to_edge).collect();
        assert_eq!(interaction_degrees(&rows), compute_degrees(&as_edges));
    }

    #[test]
    fn test_top_nodes_clamps() {
        let ranked = compute_degrees(&edges(&[("A", "B"), ("B", "C")]));
        assert_eq!(top_nodes(&ranked, 1), &[DegreeEntry::new("B", 2)]);
        assert_eq!(top_nodes(&ranked, DEFAULT_CORE_TARGETS).len(), 3);
    }

    proptest! {
        #[test]
        fn prop_degree_ignores_edge_direction(
            pairs in prop::collection::vec(("[A-F]", "[A-F]"), 0..25),
            flips in prop::collection::vec(any::<bool>(), 25),
        ) {
            let original: Vec<Edge> = pairs.iter().map(|(a, b)| Edge::new(a.clone(), b.clone())).collect();
            let flipped: Vec<Edge> = original
                .iter()
                .zip(&flips)
                .map(|(e, flip)| if *flip { e.reversed() } else { e.clone() })
                .collect();

            let as_map = |ranked: Vec<DegreeEntry>| -> HashMap<String, usize> {
                ranked.into_iter().map(|d| (d.node, d.degree)).collect()
            };
            prop_assert_eq!(as_map(compute_degrees(&original)), as_map(compute_degrees(&flipped)));
        }
    }
}
