//! Typed readers for caller-supplied tables
//!
//! Column names are checked once, here, at the ingestion boundary. A table
//! missing required columns fails fast with
//! [`BiorangeError::MissingColumns`] listing every absent column, since that
//! is caller misuse rather than a transient failure.
//!
//! Multi-gene `gene_name` fields (`"TP53;AKT1"`) are exploded into one row
//! per gene. Explosion never loses a row: a field with no genes still yields
//! one row with an empty gene, and rows with an empty term or compound are
//! kept. Downstream stages ignore the empty names.

use biorange_common::types::{CompoundGene, Edge, PathwayGene};
use biorange_common::{BiorangeError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Separator between genes in a multi-gene field
pub const GENE_SEPARATOR: char = ';';

/// Default gene-list column, as produced by the shared-target intersection
pub const DEFAULT_GENE_COLUMN: &str = "shared_targets";

/// A required column and the alternative headers accepted for it
#[derive(Debug, Clone, Copy)]
struct Column {
    name: &'static str,
    aliases: &'static [&'static str],
}

impl Column {
    const fn new(name: &'static str) -> Self {
        Self { name, aliases: &[] }
    }

    const fn with_aliases(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { name, aliases }
    }

    fn locate(&self, headers: &csv::StringRecord) -> Option<usize> {
        std::iter::once(self.name)
            .chain(self.aliases.iter().copied())
            .find_map(|candidate| headers.iter().position(|h| h.trim() == candidate))
    }

    fn describe(&self) -> String {
        if self.aliases.is_empty() {
            self.name.to_string()
        } else {
            format!("{} (or {})", self.name, self.aliases.join(", "))
        }
    }
}

const GENE_NAME: Column = Column::new("gene_name");
const TERM: Column = Column::with_aliases("term", &["Description"]);
const COMPOUND: Column = Column::with_aliases("ingredient_name", &["compound_name"]);
const NODE1: Column = Column::new("node1");
const NODE2: Column = Column::new("node2");

/// Split a multi-gene field into trimmed, non-empty gene names
pub fn explode_genes(field: &str) -> impl Iterator<Item = &str> {
    field
        .split(GENE_SEPARATOR)
        .map(str::trim)
        .filter(|gene| !gene.is_empty())
}

/// Genes of one row; a field without genes yields a single empty entry
pub fn explode_row(field: &str) -> Vec<&str> {
    let genes: Vec<&str> = explode_genes(field).collect();
    if genes.is_empty() {
        vec![""]
    } else {
        genes
    }
}

/// Explode a gene list and drop repeats, keeping first-seen order
pub fn distinct_genes<S: AsRef<str>>(fields: &[S]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    fields
        .iter()
        .flat_map(|field| explode_genes(field.as_ref()))
        .filter(|gene| seen.insert(*gene))
        .map(str::to_string)
        .collect()
}

/// Open a CSV source and resolve `columns` to indices, all at once
fn open_table<R: Read>(
    source: R,
    table: &str,
    columns: &[Column],
) -> Result<(csv::Reader<R>, Vec<usize>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let headers = reader.headers()?.clone();

    let mut indices = Vec::with_capacity(columns.len());
    let mut missing = Vec::new();
    for column in columns {
        match column.locate(&headers) {
            Some(index) => indices.push(index),
            None => missing.push(column.describe()),
        }
    }

    if !missing.is_empty() {
        return Err(BiorangeError::missing_columns(table, missing));
    }

    Ok((reader, indices))
}

fn field(record: &csv::StringRecord, index: usize) -> &str {
    record.get(index).map(str::trim).unwrap_or("")
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        BiorangeError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })
}

/// Read a gene-to-pathway table (`gene_name`, `term` or `Description`)
///
/// Every input row yields at least one output row.
pub fn read_pathway_table<R: Read>(source: R, table: &str) -> Result<Vec<PathwayGene>> {
    let (mut reader, indices) = open_table(source, table, &[GENE_NAME, TERM])?;
    let (gene_idx, term_idx) = (indices[0], indices[1]);

    let mut rows = Vec::new();
    let mut raw_rows = 0usize;
    for record in reader.records() {
        let record = record?;
        raw_rows += 1;
        let term = field(&record, term_idx);
        if term.is_empty() {
            debug!(table, row = raw_rows, "Pathway row without a term");
        }
        rows.extend(
            explode_row(field(&record, gene_idx))
                .into_iter()
                .map(|gene| PathwayGene::new(gene, term)),
        );
    }

    info!(table, raw_rows, exploded_rows = rows.len(), "Loaded pathway table");
    Ok(rows)
}

/// Read a gene-to-compound table (`gene_name`, `ingredient_name` or
/// `compound_name`)
pub fn read_compound_table<R: Read>(source: R, table: &str) -> Result<Vec<CompoundGene>> {
    let (mut reader, indices) = open_table(source, table, &[GENE_NAME, COMPOUND])?;
    let (gene_idx, compound_idx) = (indices[0], indices[1]);

    let mut rows = Vec::new();
    let mut raw_rows = 0usize;
    for record in reader.records() {
        let record = record?;
        raw_rows += 1;
        let compound = field(&record, compound_idx);
        rows.extend(
            explode_row(field(&record, gene_idx))
                .into_iter()
                .map(|gene| CompoundGene::new(gene, compound)),
        );
    }

    info!(table, raw_rows, exploded_rows = rows.len(), "Loaded compound table");
    Ok(rows)
}

/// Read an edge table (`node1`, `node2`)
pub fn read_edge_table<R: Read>(source: R, table: &str) -> Result<Vec<Edge>> {
    let (mut reader, indices) = open_table(source, table, &[NODE1, NODE2])?;

    let mut edges = Vec::new();
    for record in reader.records() {
        let record = record?;
        let (a, b) = (field(&record, indices[0]), field(&record, indices[1]));
        if a.is_empty() || b.is_empty() {
            continue;
        }
        edges.push(Edge::new(a, b));
    }

    debug!(table, edges = edges.len(), "Loaded edge table");
    Ok(edges)
}

/// Read one identifier column, in file order, skipping empty cells
///
/// With `column = None` the first column is used.
pub fn read_identifier_column<R: Read>(
    source: R,
    table: &str,
    column: Option<&str>,
) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let headers = reader.headers()?.clone();

    let index = match column {
        Some(name) => headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| BiorangeError::missing_columns(table, vec![name.to_string()]))?,
        None if headers.is_empty() => {
            return Err(BiorangeError::invalid_input(format!("Table '{}' has no columns", table)))
        },
        None => 0,
    };

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        let value = field(&record, index);
        if !value.is_empty() {
            values.push(value.to_string());
        }
    }

    Ok(values)
}

pub fn load_pathway_table(path: &Path) -> Result<Vec<PathwayGene>> {
    read_pathway_table(open_file(path)?, &path.display().to_string())
}

pub fn load_compound_table(path: &Path) -> Result<Vec<CompoundGene>> {
    read_compound_table(open_file(path)?, &path.display().to_string())
}

pub fn load_edge_table(path: &Path) -> Result<Vec<Edge>> {
    read_edge_table(open_file(path)?, &path.display().to_string())
}

pub fn load_identifier_column(path: &Path, column: Option<&str>) -> Result<Vec<String>> {
    read_identifier_column(open_file(path)?, &path.display().to_string(), column)
}
