//! Type reconciliation
//!
//! Joins three heterogeneous sources into one homogeneous dataset:
//!
//! 1. gene → pathway associations (exploded pathway table)
//! 2. gene → compound associations (left join on `gene_name`)
//! 3. protein-protein interactions, restricted to the gene universe
//!
//! The edge list is the row concatenation of the three contributions, in
//! that order, duplicates included. The node-type table is the distinct
//! `(node, kind)` pairs across them.
//!
//! Exploded rows may carry an empty gene, term, or compound. Empty names
//! never become nodes: a row with one missing endpoint contributes no edge,
//! but its named endpoint is still typed.

use biorange_common::types::{
    CompoundGene, Edge, InteractionRow, NodeKind, NodeType, PathwayGene,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// The distinct non-empty genes of `pathways`, in first-seen order
///
/// This is both the identifier list sent to the interaction service and the
/// universe interactions are filtered against.
pub fn gene_universe(pathways: &[PathwayGene]) -> Vec<String> {
    let mut seen = HashSet::new();
    pathways
        .iter()
        .map(|row| row.gene_name.as_str())
        .filter(|gene| !gene.is_empty() && seen.insert(*gene))
        .map(str::to_string)
        .collect()
}

/// Keep only interactions whose endpoints are both in `universe`
pub fn filter_interactions<S: AsRef<str>>(
    interactions: &[InteractionRow],
    universe: &[S],
) -> Vec<InteractionRow> {
    let members: HashSet<&str> = universe.iter().map(AsRef::as_ref).collect();
    let kept: Vec<InteractionRow> = interactions
        .iter()
        .filter(|row| {
            members.contains(row.preferred_name_a.as_str())
                && members.contains(row.preferred_name_b.as_str())
        })
        .cloned()
        .collect();

    debug!(
        fetched = interactions.len(),
        kept = kept.len(),
        "Filtered interactions to gene universe"
    );
    kept
}

/// Left-join pathway genes with compounds, dropping genes with no compound
///
/// Output follows the pathway rows; each row contributes one association per
/// matching compound row, in compound-table order.
pub fn associate_compounds(
    pathways: &[PathwayGene],
    compounds: &[CompoundGene],
) -> Vec<CompoundGene> {
    let mut by_gene: HashMap<&str, Vec<&str>> = HashMap::new();
    for row in compounds
        .iter()
        .filter(|row| !row.gene_name.is_empty() && !row.compound_name.is_empty())
    {
        by_gene
            .entry(row.gene_name.as_str())
            .or_default()
            .push(row.compound_name.as_str());
    }

    let by_gene = &by_gene;
    pathways
        .iter()
        .flat_map(move |pathway| {
            by_gene
                .get(pathway.gene_name.as_str())
                .into_iter()
                .flatten()
                .map(move |compound| CompoundGene::new(pathway.gene_name.clone(), *compound))
        })
        .collect()
}

/// Remove exact duplicate node-type rows, keeping first occurrences in order
///
/// Idempotent: deduplicating an already deduplicated table is a no-op.
pub fn dedup_node_types(node_types: impl IntoIterator<Item = NodeType>) -> Vec<NodeType> {
    let mut seen = HashSet::new();
    node_types
        .into_iter()
        .filter(|row| seen.insert(row.clone()))
        .collect()
}

/// Merged, typed network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDataset {
    pub edges: Vec<Edge>,
    pub node_types: Vec<NodeType>,
}

impl NetworkDataset {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.node_types.is_empty()
    }

    /// Nodes that carry more than one kind
    ///
    /// Disjointness is a caller invariant that is not enforced; this makes
    /// violations visible.
    pub fn multi_typed_nodes(&self) -> Vec<&str> {
        let mut kinds: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for row in &self.node_types {
            let count = kinds.entry(row.node.as_str()).or_insert(0);
            if *count == 0 {
                order.push(row.node.as_str());
            }
            *count += 1;
        }
        order.into_iter().filter(|node| kinds[node] > 1).collect()
    }
}

/// Build the merged dataset from already-filtered contributions
pub fn reconcile(
    pathways: &[PathwayGene],
    gene_compounds: &[CompoundGene],
    interactions: &[InteractionRow],
) -> NetworkDataset {
    let edges: Vec<Edge> = pathways
        .iter()
        .map(|row| Edge::new(row.gene_name.clone(), row.term.clone()))
        .chain(
            gene_compounds
                .iter()
                .map(|row| Edge::new(row.gene_name.clone(), row.compound_name.clone())),
        )
        .chain(interactions.iter().map(InteractionRow::to_edge))
        .filter(|edge| !edge.node1.is_empty() && !edge.node2.is_empty())
        .collect();

    let node_types = dedup_node_types(
        pathways
            .iter()
            .map(|row| NodeType::new(row.term.clone(), NodeKind::Pathway))
            .chain(
                pathways
                    .iter()
                    .map(|row| NodeType::new(row.gene_name.clone(), NodeKind::Target)),
            )
            .chain(
                gene_compounds
                    .iter()
                    .map(|row| NodeType::new(row.compound_name.clone(), NodeKind::Compound)),
            )
            .filter(|row| !row.node.is_empty()),
    );

    let dataset = NetworkDataset { edges, node_types };

    let overlapping = dataset.multi_typed_nodes();
    if !overlapping.is_empty() {
        debug!(nodes = ?overlapping, "Nodes appear under more than one type");
    }

    info!(
        pathway_edges = pathways.len(),
        compound_edges = gene_compounds.len(),
        interaction_edges = interactions.len(),
        node_types = dataset.node_types.len(),
        "Reconciled network dataset"
    );

    dataset
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pathways() -> Vec<PathwayGene> {
        vec![
            PathwayGene::new("AKT1", "PI3K-Akt"),
            PathwayGene::new("TP53", "PI3K-Akt"),
            PathwayGene::new("TP53", "p53 signaling"),
            PathwayGene::new("EGFR", "ErbB signaling"),
        ]
    }

    #[test]
    fn test_gene_universe_is_distinct_in_first_seen_order() {
        assert_eq!(gene_universe(&pathways()), vec!["AKT1", "TP53", "EGFR"]);
    }

    #[test]
    fn test_filter_requires_both_endpoints() {
        let interactions = vec![
            InteractionRow::new("AKT1", "TP53"),
            InteractionRow::new("TP53", "MDM2"),
            InteractionRow::new("GAPDH", "MYC"),
            InteractionRow::new("EGFR", "AKT1"),
        ];
        let kept = filter_interactions(&interactions, &gene_universe(&pathways()));
        assert_eq!(
            kept,
            vec![
                InteractionRow::new("AKT1", "TP53"),
                InteractionRow::new("EGFR", "AKT1"),
            ]
        );
    }

    #[test]
    fn test_left_join_drops_genes_without_compounds() {
        let compounds = vec![
            CompoundGene::new("TP53", "quercetin"),
            CompoundGene::new("AKT1", "kaempferol"),
            CompoundGene::new("TP53", "luteolin"),
        ];
        let joined = associate_compounds(&pathways(), &compounds);
        assert_eq!(
            joined,
            vec![
                CompoundGene::new("AKT1", "kaempferol"),
                CompoundGene::new("TP53", "quercetin"),
                CompoundGene::new("TP53", "luteolin"),
                CompoundGene::new("TP53", "quercetin"),
                CompoundGene::new("TP53", "luteolin"),
            ]
        );
        assert!(joined.iter().all(|row| row.gene_name != "EGFR"));
    }

    #[test]
    fn test_gene_without_compound_still_has_pathway_edge() {
        let compounds = vec![CompoundGene::new("TP53", "quercetin")];
        let joined = associate_compounds(&pathways(), &compounds);
        let dataset = reconcile(&pathways(), &joined, &[]);

        assert!(dataset
            .edges
            .contains(&Edge::new("EGFR", "ErbB signaling")));
        assert!(!dataset.edges.iter().any(|e| e.node1 == "EGFR" && e.node2 == "quercetin"));
        assert!(dataset
            .node_types
            .contains(&NodeType::new("EGFR", NodeKind::Target)));
    }

    #[test]
    fn test_reconcile_concatenates_in_order() {
        let joined = vec![CompoundGene::new("TP53", "quercetin")];
        let interactions = vec![InteractionRow::new("AKT1", "TP53")];
        let dataset = reconcile(&pathways(), &joined, &interactions);

        assert_eq!(
            dataset.edges,
            vec![
                Edge::new("AKT1", "PI3K-Akt"),
                Edge::new("TP53", "PI3K-Akt"),
                Edge::new("TP53", "p53 signaling"),
                Edge::new("EGFR", "ErbB signaling"),
                Edge::new("TP53", "quercetin"),
                Edge::new("AKT1", "TP53"),
            ]
        );
        assert_eq!(
            dataset.node_types,
            vec![
                NodeType::new("PI3K-Akt", NodeKind::Pathway),
                NodeType::new("p53 signaling", NodeKind::Pathway),
                NodeType::new("ErbB signaling", NodeKind::Pathway),
                NodeType::new("AKT1", NodeKind::Target),
                NodeType::new("TP53", NodeKind::Target),
                NodeType::new("EGFR", NodeKind::Target),
                NodeType::new("quercetin", NodeKind::Compound),
            ]
        );
    }

    #[test]
    fn test_overlapping_types_are_kept() {
        // A compound named like a gene is not collapsed into one row
        let pathways = vec![PathwayGene::new("ESR1", "Estrogen signaling")];
        let joined = vec![CompoundGene::new("ESR1", "ESR1")];
        let dataset = reconcile(&pathways, &joined, &[]);

        assert!(dataset
            .node_types
            .contains(&NodeType::new("ESR1", NodeKind::Target)));
        assert!(dataset
            .node_types
            .contains(&NodeType::new("ESR1", NodeKind::Compound)));
        assert_eq!(dataset.multi_typed_nodes(), vec!["ESR1"]);
    }

    #[test]
    fn test_rows_with_empty_names_keep_their_named_node() {
        let pathways = vec![
            PathwayGene::new("", "Orphan pathway"),
            PathwayGene::new("TP53", ""),
            PathwayGene::new("AKT1", "PI3K-Akt"),
        ];
        let compounds = vec![
            CompoundGene::new("", "kaempferol"),
            CompoundGene::new("TP53", "quercetin"),
        ];

        assert_eq!(gene_universe(&pathways), vec!["TP53", "AKT1"]);

        let joined = associate_compounds(&pathways, &compounds);
        assert_eq!(joined, vec![CompoundGene::new("TP53", "quercetin")]);

        let dataset = reconcile(&pathways, &joined, &[]);
        assert_eq!(
            dataset.edges,
            vec![Edge::new("AKT1", "PI3K-Akt"), Edge::new("TP53", "quercetin")]
        );
        assert_eq!(
            dataset.node_types,
            vec![
                NodeType::new("Orphan pathway", NodeKind::Pathway),
                NodeType::new("PI3K-Akt", NodeKind::Pathway),
                NodeType::new("TP53", NodeKind::Target),
                NodeType::new("AKT1", NodeKind::Target),
                NodeType::new("quercetin", NodeKind::Compound),
            ]
        );
    }

    #[test]
    fn test_empty_inputs_give_empty_dataset() {
        let dataset = reconcile(&[], &[], &[]);
        assert!(dataset.is_empty());
    }

    fn node_name() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["A", "B", "C", "D", "E", "F"]).prop_map(str::to_string)
    }

    proptest! {
        #[test]
        fn prop_filtered_edges_stay_inside_universe(
            universe in prop::collection::vec(node_name(), 0..5),
            pairs in prop::collection::vec((node_name(), node_name()), 0..30),
        ) {
            let interactions: Vec<InteractionRow> =
                pairs.iter().map(|(a, b)| InteractionRow::new(a.clone(), b.clone())).collect();
            let kept = filter_interactions(&interactions, &universe);
            for row in &kept {
                prop_assert!(universe.contains(&row.preferred_name_a));
                prop_assert!(universe.contains(&row.preferred_name_b));
            }
        }

        #[test]
        fn prop_node_type_dedup_is_idempotent(
            rows in prop::collection::vec(
                (node_name(), prop::sample::select(vec![NodeKind::Pathway, NodeKind::Target, NodeKind::Compound])),
                0..40,
            ),
        ) {
            let rows: Vec<NodeType> = rows.into_iter().map(|(n, k)| NodeType::new(n, k)).collect();
            let once = dedup_node_types(rows);
            let unique: HashSet<&NodeType> = once.iter().collect();
            prop_assert_eq!(unique.len(), once.len());
            prop_assert_eq!(dedup_node_types(once.clone()), once);
        }
    }
}
