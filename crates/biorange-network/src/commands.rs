//! Command handlers
//!
//! Each handler loads its inputs, runs the matching stage, and writes its
//! tables. Input problems fail fast; interaction service problems only show
//! up in the returned summary.

use crate::cli::Cli;
use crate::config::NetworkConfig;
use crate::degree::{compute_degrees, top_nodes};
use crate::intersect::{intersections, Group};
use crate::output::{self, RunSummary};
use crate::pipeline::NetworkPipeline;
use crate::string_db::StringDbClient;
use crate::tables;
use biorange_common::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment configuration with command-line overrides applied
pub fn resolve_config(cli: &Cli) -> Result<NetworkConfig> {
    let mut config = NetworkConfig::load()?;

    if let Some(url) = &cli.string_url {
        config.string_db.base_url = url.clone();
    }
    if let Some(species) = cli.species {
        config.string_db.species = species;
    }
    if let Some(identity) = &cli.caller_identity {
        config.string_db.caller_identity = identity.clone();
    }

    config.validate()?;
    Ok(config)
}

fn pipeline(config: &NetworkConfig) -> Result<NetworkPipeline<StringDbClient>> {
    let client = StringDbClient::new(&config.string_db)?;
    Ok(NetworkPipeline::new(client, config.string_db.species))
}

fn output_dir(config: &NetworkConfig, output: Option<&Path>) -> PathBuf {
    output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output.dir.clone())
}

pub async fn ppi(
    config: &NetworkConfig,
    genes: &Path,
    column: &str,
    output: Option<&Path>,
) -> Result<RunSummary> {
    let cells = tables::load_identifier_column(genes, Some(column))?;
    let genes = tables::distinct_genes(&cells);
    info!(cells = cells.len(), genes = genes.len(), "Loaded gene list");

    let pipeline = pipeline(config)?;
    let run = pipeline.run_ppi(&genes).await;

    output::write_ppi_run(&output_dir(config, output), &run, pipeline.species())
}

pub async fn network(
    config: &NetworkConfig,
    pathways: &Path,
    compounds: &Path,
    output: Option<&Path>,
) -> Result<RunSummary> {
    let pathways = tables::load_pathway_table(pathways)?;
    let compounds = tables::load_compound_table(compounds)?;

    let pipeline = pipeline(config)?;
    let run = pipeline.run_network(&pathways, &compounds).await;

    output::write_network_run(&output_dir(config, output), &run, pipeline.species())
}

/// Rank an edge table, returning the number of nodes written
pub fn degree(edges: &Path, output: &Path, top: Option<usize>) -> Result<usize> {
    let edges = tables::load_edge_table(edges)?;
    let ranked = compute_degrees(&edges);
    let kept = match top {
        Some(n) => top_nodes(&ranked, n),
        None => &ranked[..],
    };

    output::write_degrees(output, kept)?;
    Ok(kept.len())
}

/// Intersect labelled identifier files, returning the number of intersections
pub fn intersect(groups: &[(String, PathBuf)], column: Option<&str>, output: &Path) -> Result<usize> {
    let groups = groups
        .iter()
        .map(|(label, path)| -> Result<Group> {
            let members = tables::load_identifier_column(path, column)?;
            Ok(Group::new(label.clone(), members))
        })
        .collect::<Result<Vec<_>>>()?;

    let result = intersections(&groups)?;
    for entry in &result {
        info!(name = %entry.name, members = entry.members.len(), "Intersection");
    }

    output::write_intersections(output, &result)?;
    Ok(result.len())
}
