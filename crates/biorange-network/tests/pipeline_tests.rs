//! Pipeline and output tests against a mock interaction service

use biorange_common::types::{CompoundGene, PathwayGene};
use biorange_network::config::StringDbConfig;
use biorange_network::output::{
    self, RunSummary, DEGREE_FILE, INTERACTIONS_FILE, INTERACTION_DEGREE_FILE,
    NODE_RELATIONSHIPS_FILE, NODE_TYPES_FILE, SUMMARY_FILE,
};
use biorange_network::pipeline::{InteractionStatus, NetworkPipeline};
use biorange_network::string_db::{FetchFailure, StringDbClient};
use std::fs;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn pipeline_for(server: &MockServer) -> NetworkPipeline<StringDbClient> {
    let config = StringDbConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    let client = StringDbClient::new(&config).expect("client should build");
    NetworkPipeline::new(client, config.species)
}

fn read(dir: &TempDir, file: &str) -> String {
    fs::read_to_string(dir.path().join(file)).expect("output file should exist")
}

#[tokio::test]
async fn test_server_error_writes_empty_tables_with_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tsv/network"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let pipeline = pipeline_for(&mock_server);
    let run = pipeline
        .run_ppi(&["TP53".to_string(), "AKT1".to_string()])
        .await;

    assert!(matches!(
        run.status,
        InteractionStatus::FetchFailed(FetchFailure::Status { status: 500, .. })
    ));

    let out = TempDir::new().expect("temp dir");
    let summary = output::write_ppi_run(out.path(), &run, 9606).expect("write should succeed");

    assert_eq!(read(&out, INTERACTIONS_FILE), "node1,node2\n");
    assert_eq!(read(&out, INTERACTION_DEGREE_FILE), "node,degree\n");
    assert_eq!(summary.counts.interactions, 0);

    let stored: RunSummary =
        serde_json::from_str(&read(&out, SUMMARY_FILE)).expect("summary should be valid JSON");
    assert_eq!(stored.run_id, summary.run_id);
    assert_eq!(stored.interaction_status, run.status);
}

#[tokio::test]
async fn test_full_network_run() {
    let mock_server = MockServer::start().await;

    let body = "stringId_A\tstringId_B\tpreferredName_A\tpreferredName_B\tscore\n\
                9606.1\t9606.2\tAKT1\tTP53\t0.99\n\
                9606.2\t9606.3\tTP53\tMDM2\t0.95\n\
                9606.4\t9606.1\tEGFR\tAKT1\t0.90\n";

    Mock::given(method("POST"))
        .and(path("/tsv/network"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pathways = vec![
        PathwayGene::new("AKT1", "PI3K-Akt signaling pathway"),
        PathwayGene::new("TP53", "PI3K-Akt signaling pathway"),
        PathwayGene::new("TP53", "p53 signaling pathway"),
        PathwayGene::new("EGFR", "ErbB signaling pathway"),
    ];
    let compounds = vec![
        CompoundGene::new("TP53", "quercetin"),
        CompoundGene::new("AKT1", "kaempferol"),
    ];

    let pipeline = pipeline_for(&mock_server);
    let run = pipeline.run_network(&pathways, &compounds).await;

    assert_eq!(run.status, InteractionStatus::Fetched { rows: 3, kept: 2 });

    let out = TempDir::new().expect("temp dir");
    let summary = output::write_network_run(out.path(), &run, 9606).expect("write should succeed");
    assert_eq!(summary.mode, "network");
    assert_eq!(summary.counts.identifiers, 3);

    assert_eq!(
        read(&out, NODE_RELATIONSHIPS_FILE),
        "node1,node2\n\
         AKT1,PI3K-Akt signaling pathway\n\
         TP53,PI3K-Akt signaling pathway\n\
         TP53,p53 signaling pathway\n\
         EGFR,ErbB signaling pathway\n\
         AKT1,kaempferol\n\
         TP53,quercetin\n\
         TP53,quercetin\n\
         AKT1,TP53\n\
         EGFR,AKT1\n"
    );

    let node_types = read(&out, NODE_TYPES_FILE);
    assert!(node_types.starts_with("node,type\nPI3K-Akt signaling pathway,pathway\n"));
    assert!(node_types.contains("EGFR,target\n"));
    assert!(node_types.ends_with("kaempferol,compound\nquercetin,compound\n"));

    let degree = read(&out, DEGREE_FILE);
    let mut lines = degree.lines();
    assert_eq!(lines.next(), Some("node,degree"));
    assert_eq!(lines.next(), Some("AKT1,4"));
    assert_eq!(lines.next(), Some("TP53,4"));
}
