#![allow(dead_code)]

use axum_test::TestServer;
use referral_service::routes::router;
use referral_service::state::AppState;

/// State over fresh in-memory repositories seeded with the demo users.
pub fn create_test_state() -> AppState {
    AppState::in_memory(true)
}

/// Test server over the full route table, without the rate limiter.
pub fn create_test_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

/// Fetches (and on first call assigns) a user's referral code.
pub async fn referral_code_for(server: &TestServer, uid: &str) -> String {
    let response = server.get(&format!("/api/user/code/{uid}")).await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    json["referral_code"].as_str().unwrap().to_string()
}

/// Records a referral and returns the JSON bool answer.
pub async fn add_referral(
    server: &TestServer,
    uid: &str,
    name: &str,
    channel: &str,
    referral_code: &str,
) -> bool {
    let response = server
        .post("/api/referrals")
        .json(&serde_json::json!({
            "uid": uid,
            "name": name,
            "channel": channel,
            "referral_code": referral_code,
        }))
        .await;
    response.assert_status_ok();

    response.json::<bool>()
}
