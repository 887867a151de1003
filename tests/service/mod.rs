use blackwater::service::policy::IngestPolicy;
use blackwater_test_utils::prelude::*;

mod auction {
    use super::*;

    mod ingest_all;
    mod ingest_realms;
    mod persist_snapshot;
}

mod item {
    use super::*;

    mod cache_missing_items;
}

mod realm {
    use super::*;

    mod update_realms;
}

/// Default limits with every delay removed.
fn test_policy() -> IngestPolicy {
    IngestPolicy::default().without_delays()
}

/// Client against the mock server without a token, so the first request exchanges
/// credentials at `/token`.
fn unauthenticated_client(test: &TestContext) -> Result<blizzard::Client, TestError> {
    let server_url = test.server_url();
    let config = blizzard::Config::builder()
        .api_url(&server_url)
        .token_url(&format!("{}/token", server_url))
        .build()?;

    Ok(blizzard::Client::builder()
        .config(config)
        .client_id("rejected_client_id")
        .client_secret("rejected_client_secret")
        .build()?)
}

/// Token endpoint rejecting every credential exchange.
fn rejecting_token_endpoint(server: &mut mockito::ServerGuard) -> mockito::Mock {
    server
        .mock("POST", "/token")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"invalid_client","error_description":"Invalid client"}"#)
        .expect(1)
        .create()
}
