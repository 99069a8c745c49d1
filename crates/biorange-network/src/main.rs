//! biorange - network-merge tool

use anyhow::Result;
use biorange_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use biorange_network::commands;
use biorange_network::output::RunSummary;
use biorange_network::{Cli, Commands};
use clap::Parser;
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    let log_config = LogConfig::builder()
        .level(log_level)
        .output(LogOutput::Console)
        .log_file_prefix("biorange")
        .filter_directives("hyper=warn,reqwest=warn")
        .build();

    // Environment variables take precedence
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    let _guard = init_logging(&log_config)?;

    match &cli.command {
        Commands::Ppi {
            genes,
            column,
            output,
        } => {
            let config = commands::resolve_config(&cli)?;
            let summary = commands::ppi(&config, genes, column, output.as_deref()).await?;
            report(&summary);
        },
        Commands::Network {
            pathways,
            compounds,
            output,
        } => {
            let config = commands::resolve_config(&cli)?;
            let summary =
                commands::network(&config, pathways, compounds, output.as_deref()).await?;
            report(&summary);
        },
        Commands::Degree { edges, output, top } => {
            let nodes = commands::degree(edges, output, *top)?;
            println!("Ranked {} nodes -> {}", nodes, output.display());
        },
        Commands::Intersect {
            groups,
            column,
            output,
        } => {
            let count = commands::intersect(groups, column.as_deref(), output)?;
            println!("Wrote {} intersections -> {}", count, output.display());
        },
    }

    info!("Done");
    Ok(())
}

fn report(summary: &RunSummary) {
    if !summary.interaction_status.is_fetched() {
        warn!(status = ?summary.interaction_status, "Run finished without interactions");
    }

    println!("Run {} ({})", summary.run_id, summary.mode);
    println!("  interactions: {}", summary.counts.interactions);
    println!("  edges:        {}", summary.counts.edges);
    println!("  nodes ranked: {}", summary.counts.degree_nodes);
    for file in &summary.files {
        println!("  wrote {}", file.display());
    }
}
