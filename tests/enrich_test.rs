use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use tokio::time::Duration;

use zendesk_exporter::{CommentEnricher, Config, ExportPipeline, Throttle, ZendeskClient};
use zendesk_exporter::models::RawTicket;

fn test_config() -> Config {
    Config {
        subdomain: "test".to_string(),
        email: "agent@example.com".to_string(),
        api_token: "secret".to_string(),
    }
}

fn test_client(server: &MockServer) -> ZendeskClient {
    ZendeskClient::with_base_url(&test_config(), server.url("/api/v2")).unwrap()
}

fn raw_ticket(id: u64, subject: &str) -> RawTicket {
    serde_json::from_value(json!({
        "id": id,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z",
        "subject": subject,
    }))
    .unwrap()
}

#[tokio::test]
async fn test_enrich_preserves_order_and_absorbs_failures() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/v2/tickets/1/comments.json");
        then.status(200).json_body(json!({
            "comments": [
                {"author_id": 5, "created_at": "t0", "body": "desc"},
                {"author_id": 7, "created_at": "t1", "body": "hello"},
            ]
        }));
    });
    // Comment fetches are non-fatal: this ticket still exports, just empty.
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/tickets/2/comments.json");
        then.status(404);
    });

    let client = test_client(&server);
    let enricher = CommentEnricher::with_throttle(&client, Throttle::new(Duration::ZERO));
    let records = enricher
        .enrich(vec![raw_ticket(1, "X"), raw_ticket(2, "Y")])
        .await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[1].id, 2);
    assert_eq!(records[0].comments, "Comment by 7 at t1:\nhello");
    assert_eq!(records[1].comments, "");
}

#[tokio::test]
async fn test_enrich_single_comment_thread_is_empty() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/v2/tickets/3/comments.json");
        then.status(200).json_body(json!({
            "comments": [
                {"author_id": 5, "created_at": "t0", "body": "just the description"},
            ]
        }));
    });

    let client = test_client(&server);
    let enricher = CommentEnricher::with_throttle(&client, Throttle::new(Duration::ZERO));
    let records = enricher.enrich(vec![raw_ticket(3, "Z")]).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].comments, "");
}

#[tokio::test]
async fn test_full_pipeline_writes_csv() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/tickets.json")
            .query_param("per_page", "100");
        then.status(200).json_body(json!({
            "tickets": [
                {
                    "id": 1,
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-01-02T00:00:00Z",
                    "subject": "X",
                    "tags": ["a", "b"],
                },
            ],
            "next_page": null,
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v2/tickets/1/comments.json");
        then.status(200).json_body(json!({
            "comments": [
                {"author_id": 5, "created_at": "t0", "body": "desc"},
                {"author_id": 7, "created_at": "t1", "body": "hello"},
            ]
        }));
    });

    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.csv");
    let output = output.to_str().unwrap();

    let pipeline = ExportPipeline::new(test_client(&server));
    let filename = pipeline.run(None, None, Some(output)).await.unwrap();
    assert_eq!(filename, output);

    let mut reader = csv::Reader::from_path(&filename).unwrap();
    assert_eq!(&reader.headers().unwrap()[0], "Ticket ID");
    let rows: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][0], "1");
    assert_eq!(&rows[0][3], "X");
    assert_eq!(&rows[0][9], "a, b");
    assert_eq!(&rows[0][10], "Comment by 7 at t1:\nhello");
}
