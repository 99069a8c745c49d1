//! biorange network library
//!
//! Builds a typed pathway/target/compound network from enrichment results,
//! compound-target tables, and STRING protein-protein interactions, then
//! ranks its nodes by degree.
//!
//! # Modules
//!
//! - **tables**: typed readers for the caller's CSV tables
//! - **string_db**: STRING network client and TSV parser
//! - **reconcile**: filtering, joining, and node typing
//! - **degree**: degree ranking
//! - **intersect**: Venn-style intersections of identifier lists
//! - **pipeline**: stage orchestration over an injected interaction source
//! - **output**: flat-file tables and the run summary
//!
//! # Example
//!
//! ```no_run
//! use biorange_network::config::NetworkConfig;
//! use biorange_network::pipeline::NetworkPipeline;
//! use biorange_network::string_db::StringDbClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = NetworkConfig::load()?;
//!     let client = StringDbClient::new(&config.string_db)?;
//!     let pipeline = NetworkPipeline::new(client, config.string_db.species);
//!
//!     let run = pipeline.run_ppi(&["TP53".to_string(), "AKT1".to_string()]).await;
//!     println!("{:?}", run.status);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod degree;
pub mod intersect;
pub mod output;
pub mod pipeline;
pub mod reconcile;
pub mod string_db;
pub mod tables;

pub use cli::{Cli, Commands};
pub use pipeline::{InteractionStatus, NetworkPipeline};
