//! Build automation tasks for biorange
//!
//! Currently generates the CLI reference from the clap definitions.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for biorange", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI reference in Markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    let markdown = clap_markdown::help_markdown::<biorange_network::Cli>();

    let content = format!(
        r#"# biorange CLI Reference

Generated from the CLI source code on {}.

## Overview

biorange merges pathway enrichment results, compound-target tables, and
STRING protein-protein interactions into one typed network, and ranks its
nodes by degree.

## Quick Start

```bash
# Shared targets of two target lists
biorange intersect --group Compound=compound_targets.csv --group Disease=disease_targets.csv \
  --output shared.csv

# Interaction network of the shared targets
biorange ppi --genes shared.csv --column "Compound&Disease" --output results/ppi

# Merged pathway / target / compound network
biorange network --pathways kegg.csv --compounds compound_targets.csv --output results/network

# Core targets of an existing edge table
biorange degree --edges results/network/node_relationships.csv --top 274
```

## Configuration

| variable | meaning | default |
|---|---|---|
| `BIORANGE_STRING_URL` | STRING API base URL | `https://string-db.org/api` |
| `BIORANGE_SPECIES` | NCBI taxonomy id | `9606` |
| `BIORANGE_CALLER_IDENTITY` | caller identity sent to STRING | `biorange` |
| `BIORANGE_HTTP_TIMEOUT_SECS` | request timeout | none |
| `BIORANGE_OUTPUT_DIR` | default output directory | `./results/network` |
| `LOG_LEVEL`, `LOG_OUTPUT`, `LOG_FORMAT`, `LOG_DIR`, `LOG_FILTER` | logging | |

## Commands

{}

---

*Regenerate with `cargo xtask generate-cli-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)?;

    let file_path = output_path.join("cli.md");
    fs::write(&file_path, content)?;

    println!("Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
