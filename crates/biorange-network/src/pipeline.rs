//! Pipeline orchestration
//!
//! Stages run strictly in order: ingest, fetch, parse, filter, join,
//! reconcile, rank. The only await point is the interaction fetch. Service
//! problems never abort a run; they surface as an [`InteractionStatus`] and
//! empty interaction tables.

use crate::degree::{compute_degrees, interaction_degrees};
use crate::reconcile::{
    associate_compounds, filter_interactions, gene_universe, reconcile, NetworkDataset,
};
use crate::string_db::{parse_interactions, FetchFailure, FetchOutcome, InteractionSource, ParseFailure};
use biorange_common::types::{CompoundGene, DegreeEntry, InteractionRow, PathwayGene};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// How the interaction stage of a run ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum InteractionStatus {
    /// `rows` parsed from the reply, `kept` after filtering
    Fetched { rows: usize, kept: usize },
    FetchFailed(FetchFailure),
    ParseFailed(ParseFailure),
}

impl InteractionStatus {
    pub fn is_fetched(&self) -> bool {
        matches!(self, InteractionStatus::Fetched { .. })
    }
}

/// Output of [`NetworkPipeline::run_ppi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpiRun {
    /// Number of identifiers sent to the service
    pub identifiers: usize,
    pub status: InteractionStatus,
    pub interactions: Vec<InteractionRow>,
    pub degrees: Vec<DegreeEntry>,
}

/// Output of [`NetworkPipeline::run_network`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRun {
    /// Distinct pathway genes, also the interaction query
    pub universe: Vec<String>,
    pub status: InteractionStatus,
    /// Interactions restricted to the universe
    pub interactions: Vec<InteractionRow>,
    pub dataset: NetworkDataset,
    pub degrees: Vec<DegreeEntry>,
}

/// Network-merge pipeline over an injected interaction source
pub struct NetworkPipeline<S: InteractionSource> {
    source: S,
    species: u32,
}

impl<S: InteractionSource> NetworkPipeline<S> {
    pub fn new(source: S, species: u32) -> Self {
        Self { source, species }
    }

    pub fn species(&self) -> u32 {
        self.species
    }

    /// Fetch and parse; the parser only runs on a fetched body
    async fn interactions(&self, identifiers: &[String]) -> (InteractionStatus, Vec<InteractionRow>) {
        let body = match self.source.fetch_network(identifiers, self.species).await {
            FetchOutcome::Fetched(body) => body,
            FetchOutcome::Failed(failure) => {
                warn!(reason = %failure, "No interactions fetched");
                return (InteractionStatus::FetchFailed(failure), Vec::new());
            },
        };

        match parse_interactions(&body) {
            Ok(rows) => (
                InteractionStatus::Fetched {
                    rows: rows.len(),
                    kept: rows.len(),
                },
                rows,
            ),
            Err(failure) => {
                warn!(reason = %failure, "Interaction reply could not be parsed");
                (InteractionStatus::ParseFailed(failure), Vec::new())
            },
        }
    }

    /// Interaction network and degree ranking for a plain gene list
    #[instrument(skip(self, genes), fields(genes = genes.len(), species = self.species))]
    pub async fn run_ppi(&self, genes: &[String]) -> PpiRun {
        let (status, interactions) = self.interactions(genes).await;
        let degrees = interaction_degrees(&interactions);

        info!(
            interactions = interactions.len(),
            nodes = degrees.len(),
            "Protein interaction run finished"
        );

        PpiRun {
            identifiers: genes.len(),
            status,
            interactions,
            degrees,
        }
    }

    /// Merge pathway, compound, and interaction contributions into one
    /// typed network and rank its nodes
    ///
    /// Both tables are expected to be exploded already. A failed fetch
    /// still yields the pathway and compound contributions.
    #[instrument(
        skip(self, pathways, compounds),
        fields(pathways = pathways.len(), compounds = compounds.len(), species = self.species)
    )]
    pub async fn run_network(&self, pathways: &[PathwayGene], compounds: &[CompoundGene]) -> NetworkRun {
        let universe = gene_universe(pathways);

        let (mut status, fetched) = self.interactions(&universe).await;
        let interactions = filter_interactions(&fetched, &universe);
        if let InteractionStatus::Fetched { kept, .. } = &mut status {
            *kept = interactions.len();
        }

        let gene_compounds = associate_compounds(pathways, compounds);
        let dataset = reconcile(pathways, &gene_compounds, &interactions);
        let degrees = compute_degrees(&dataset.edges);

        info!(
            genes = universe.len(),
            edges = dataset.edges.len(),
            nodes = degrees.len(),
            "Network run finished"
        );

        NetworkRun {
            universe,
            status,
            interactions,
            dataset,
            degrees,
        }
    }
}
