//! Command-line definitions
//!
//! Kept in the library so the docs generator can render them.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// biorange - merge pathway, compound, and interaction data into one network
#[derive(Parser, Debug)]
#[command(name = "biorange")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the STRING API
    #[arg(long, env = "BIORANGE_STRING_URL", global = true)]
    pub string_url: Option<String>,

    /// NCBI taxonomy id of the queried species
    #[arg(long, env = "BIORANGE_SPECIES", global = true)]
    pub species: Option<u32>,

    /// Caller identity reported to STRING
    #[arg(long, env = "BIORANGE_CALLER_IDENTITY", global = true)]
    pub caller_identity: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the interaction network of a gene list and rank its nodes
    Ppi {
        /// CSV file holding the gene list
        #[arg(short, long)]
        genes: PathBuf,

        /// Column of the gene list
        #[arg(short, long, default_value = crate::tables::DEFAULT_GENE_COLUMN)]
        column: String,

        /// Output directory (defaults to BIORANGE_OUTPUT_DIR or ./results/network)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge pathway, compound, and interaction edges into a typed network
    Network {
        /// Pathway enrichment table (gene_name, term)
        #[arg(short, long)]
        pathways: PathBuf,

        /// Compound target table (gene_name, ingredient_name)
        #[arg(short, long)]
        compounds: PathBuf,

        /// Output directory (defaults to BIORANGE_OUTPUT_DIR or ./results/network)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rank the nodes of an edge table by degree
    Degree {
        /// Edge table (node1, node2)
        #[arg(short, long)]
        edges: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "degree.csv")]
        output: PathBuf,

        /// Keep only the N highest-ranked nodes
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Intersect two or three identifier lists
    Intersect {
        /// Labelled group as LABEL=PATH (repeat 2 or 3 times)
        #[arg(short, long = "group", value_parser = parse_group, required = true)]
        groups: Vec<(String, PathBuf)>,

        /// Column holding the identifiers (defaults to the first column)
        #[arg(short, long)]
        column: Option<String>,

        /// Output file
        #[arg(short, long, default_value = "intersections.csv")]
        output: PathBuf,
    },
}

/// Parse a `LABEL=PATH` group argument
pub fn parse_group(value: &str) -> Result<(String, PathBuf), String> {
    match value.split_once('=') {
        Some((label, path)) if !label.trim().is_empty() && !path.trim().is_empty() => {
            Ok((label.trim().to_string(), PathBuf::from(path.trim())))
        },
        _ => Err(format!("expected LABEL=PATH, got '{}'", value)),
    }
}
