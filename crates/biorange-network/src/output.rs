//! Flat-file output
//!
//! Every table is written with its header row, even when it has no rows, so
//! downstream readers always see the expected schema.

use crate::intersect::{self, Intersection};
use crate::pipeline::{InteractionStatus, NetworkRun, PpiRun};
use biorange_common::types::{DegreeEntry, Edge, InteractionRow, NodeType};
use biorange_common::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

pub const NODE_RELATIONSHIPS_FILE: &str = "node_relationships.csv";
pub const NODE_TYPES_FILE: &str = "node_types.csv";
pub const DEGREE_FILE: &str = "degree.csv";
pub const INTERACTIONS_FILE: &str = "protein_interactions.csv";
pub const INTERACTION_DEGREE_FILE: &str = "string_node_degree.csv";
pub const SUMMARY_FILE: &str = "summary.json";

const EDGE_HEADER: [&str; 2] = ["node1", "node2"];
const NODE_TYPE_HEADER: [&str; 2] = ["node", "type"];
const DEGREE_HEADER: [&str; 2] = ["node", "degree"];

/// Write `rows` under an explicit header
fn write_table<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    // Headers are written by hand so that empty tables still get one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = rows.len(), "Wrote table");
    Ok(())
}

pub fn write_edges(path: &Path, edges: &[Edge]) -> Result<()> {
    write_table(path, &EDGE_HEADER, edges)
}

pub fn write_node_types(path: &Path, node_types: &[NodeType]) -> Result<()> {
    write_table(path, &NODE_TYPE_HEADER, node_types)
}

pub fn write_degrees(path: &Path, degrees: &[DegreeEntry]) -> Result<()> {
    write_table(path, &DEGREE_HEADER, degrees)
}

pub fn write_interactions(path: &Path, interactions: &[InteractionRow]) -> Result<()> {
    write_table(path, &EDGE_HEADER, interactions)
}

pub fn write_intersections(path: &Path, intersections: &[Intersection]) -> Result<()> {
    let (header, rows) = intersect::to_columns(intersections);
    let header: Vec<&str> = header.iter().map(String::as_str).collect();
    write_table(path, &header, &rows)
}

/// Machine-readable record of one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub finished_at: DateTime<Utc>,
    pub mode: String,
    pub species: u32,
    pub interaction_status: InteractionStatus,
    pub counts: SummaryCounts,
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryCounts {
    pub identifiers: usize,
    pub interactions: usize,
    pub edges: usize,
    pub node_types: usize,
    pub degree_nodes: usize,
}

fn write_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), run_id = %summary.run_id, "Wrote run summary");
    Ok(())
}

/// Write all tables of a merged-network run into `dir`
pub fn write_network_run(dir: &Path, run: &NetworkRun, species: u32) -> Result<RunSummary> {
    std::fs::create_dir_all(dir)?;

    let files = vec![
        dir.join(NODE_RELATIONSHIPS_FILE),
        dir.join(NODE_TYPES_FILE),
        dir.join(DEGREE_FILE),
    ];
    write_edges(&files[0], &run.dataset.edges)?;
    write_node_types(&files[1], &run.dataset.node_types)?;
    write_degrees(&files[2], &run.degrees)?;

    let summary = RunSummary {
        run_id: Uuid::new_v4(),
        finished_at: Utc::now(),
        mode: "network".to_string(),
        species,
        interaction_status: run.status.clone(),
        counts: SummaryCounts {
            identifiers: run.universe.len(),
            interactions: run.interactions.len(),
            edges: run.dataset.edges.len(),
            node_types: run.dataset.node_types.len(),
            degree_nodes: run.degrees.len(),
        },
        files,
    };
    write_summary(&dir.join(SUMMARY_FILE), &summary)?;
    Ok(summary)
}

/// Write the interaction table and its degree ranking into `dir`
pub fn write_ppi_run(dir: &Path, run: &PpiRun, species: u32) -> Result<RunSummary> {
    std::fs::create_dir_all(dir)?;

    let files = vec![dir.join(INTERACTIONS_FILE), dir.join(INTERACTION_DEGREE_FILE)];
    write_interactions(&files[0], &run.interactions)?;
    write_degrees(&files[1], &run.degrees)?;

    let summary = RunSummary {
        run_id: Uuid::new_v4(),
        finished_at: Utc::now(),
        mode: "ppi".to_string(),
        species,
        interaction_status: run.status.clone(),
        counts: SummaryCounts {
            identifiers: run.identifiers,
            interactions: run.interactions.len(),
            edges: run.interactions.len(),
            node_types: 0,
            degree_nodes: run.degrees.len(),
        },
        files,
    };
    write_summary(&dir.join(SUMMARY_FILE), &summary)?;
    Ok(summary)
}
