mod common;

use referral_service::api::dto::referrals::{ReferralResponse, StatisticsResponse};

#[tokio::test]
async fn test_referral_flow_for_new_member() {
    let server = common::create_test_server();

    let code = common::referral_code_for(&server, "U1").await;
    assert_eq!(code.len(), 6);
    assert_eq!(common::referral_code_for(&server, "U1").await, code);

    assert!(common::add_referral(&server, "U1", "Jose", "EMAIL", &code).await);
    assert!(!common::add_referral(&server, "U1", "Jose", "EMAIL", &code).await);

    let response = server.get("/api/referrals/list/U1").await;
    response.assert_status_ok();

    let referrals = response.json::<Vec<ReferralResponse>>();
    assert_eq!(referrals.len(), 1);
    assert_eq!(referrals[0].name, "Jose");
    assert_eq!(referrals[0].channel, "EMAIL");
    assert_eq!(referrals[0].status, "Invited");
    assert_eq!(referrals[0].referral_id.len(), 9);
    assert_eq!(referrals[0].created_at, referrals[0].updated_at);
}

#[tokio::test]
async fn test_same_name_through_other_channel_is_recorded() {
    let server = common::create_test_server();
    let code = common::referral_code_for(&server, "U1").await;

    assert!(common::add_referral(&server, "U1", "Jose", "EMAIL", &code).await);
    assert!(common::add_referral(&server, "U1", "Jose", "SMS", &code).await);

    let referrals = server
        .get("/api/referrals/list/U1")
        .await
        .json::<Vec<ReferralResponse>>();
    assert_eq!(referrals.len(), 2);
}

#[tokio::test]
async fn test_duplicates_are_scoped_per_referrer() {
    let server = common::create_test_server();
    let code_u1 = common::referral_code_for(&server, "U1").await;
    let code_u2 = common::referral_code_for(&server, "U2").await;

    assert!(common::add_referral(&server, "U1", "Jose", "SHARE", &code_u1).await);
    assert!(common::add_referral(&server, "U2", "Jose", "SHARE", &code_u2).await);
}

#[tokio::test]
async fn test_create_accepts_method_alias_and_lowercase_channel() {
    let server = common::create_test_server();

    let response = server
        .post("/api/referrals")
        .json(&serde_json::json!({
            "uid": "U1",
            "name": "Ana",
            "method": "sms",
            "referral_code": "AB12CD",
        }))
        .await;

    response.assert_status_ok();
    assert!(response.json::<bool>());
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
    let server = common::create_test_server();

    let bad_code = server
        .post("/api/referrals")
        .json(&serde_json::json!({
            "uid": "U1",
            "name": "Jose",
            "channel": "EMAIL",
            "referral_code": "abc",
        }))
        .await;
    bad_code.assert_status_bad_request();

    let json = bad_code.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");

    let bad_channel = server
        .post("/api/referrals")
        .json(&serde_json::json!({
            "uid": "U1",
            "name": "Jose",
            "channel": "PIGEON",
            "referral_code": "AB12CD",
        }))
        .await;
    bad_channel.assert_status_bad_request();

    let empty_name = server
        .post("/api/referrals")
        .json(&serde_json::json!({
            "uid": "U1",
            "name": "",
            "channel": "EMAIL",
            "referral_code": "AB12CD",
        }))
        .await;
    empty_name.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_with_missing_field_returns_json_error() {
    let server = common::create_test_server();

    let response = server
        .post("/api/referrals")
        .json(&serde_json::json!({
            "uid": "U1",
            "name": "Jose",
            "channel": "EMAIL",
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid request body");
    assert!(
        json["error"]["details"]["reason"]
            .as_str()
            .is_some_and(|reason| reason.contains("referral_code"))
    );
}

#[tokio::test]
async fn test_create_with_malformed_body_returns_json_error() {
    let server = common::create_test_server();

    let response = server
        .post("/api/referrals")
        .content_type("application/json")
        .bytes("{\"uid\": ".into())
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_lookup_with_missing_query_param_returns_json_error() {
    let server = common::create_test_server();

    let response = server
        .get("/api/referrals")
        .add_query_param("name", "Jose")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid query string");

    let stats = server.get("/api/referrals/stats").await;
    stats.assert_status_bad_request();
    assert_eq!(
        stats.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_get_referral_by_code_and_name() {
    let server = common::create_test_server();
    let code = common::referral_code_for(&server, "U1").await;
    common::add_referral(&server, "U1", "Jose", "EMAIL", &code).await;

    let response = server
        .get("/api/referrals")
        .add_query_param("referral_code", &code)
        .add_query_param("name", "Jose")
        .await;

    response.assert_status_ok();
    let referral = response.json::<ReferralResponse>();
    assert_eq!(referral.uid, "U1");
    assert_eq!(referral.referral_code, code);

    let missing = server
        .get("/api/referrals")
        .add_query_param("referral_code", &code)
        .add_query_param("name", "Nobody")
        .await;
    missing.assert_status_not_found();
}

#[tokio::test]
async fn test_update_status() {
    let server = common::create_test_server();
    let code = common::referral_code_for(&server, "U1").await;
    common::add_referral(&server, "U1", "Jose", "EMAIL", &code).await;

    let response = server
        .put("/api/referrals")
        .add_query_param("referral_code", &code)
        .add_query_param("name", "Jose")
        .add_query_param("status", "completed")
        .await;
    response.assert_status_ok();
    assert!(response.json::<bool>());

    let referral = server
        .get("/api/referrals")
        .add_query_param("referral_code", &code)
        .add_query_param("name", "Jose")
        .await
        .json::<ReferralResponse>();
    assert_eq!(referral.status, "Completed");
    assert!(referral.updated_at >= referral.created_at);
}

#[tokio::test]
async fn test_update_status_of_missing_referral() {
    let server = common::create_test_server();

    let response = server
        .put("/api/referrals")
        .add_query_param("referral_code", "AB12CD")
        .add_query_param("name", "Jose")
        .add_query_param("status", "Started")
        .await;

    response.assert_status_ok();
    assert!(!response.json::<bool>());

    let unknown_status = server
        .put("/api/referrals")
        .add_query_param("referral_code", "AB12CD")
        .add_query_param("name", "Jose")
        .add_query_param("status", "Lost")
        .await;
    unknown_status.assert_status_bad_request();
}

#[tokio::test]
async fn test_invite_message() {
    let server = common::create_test_server();

    let sms = server
        .get("/api/referrals/invite-msg")
        .add_query_param("channel", "SMS")
        .add_query_param("referral_code", "AB12CD")
        .await;
    sms.assert_status_ok();

    let message = sms.json::<String>();
    assert!(message.starts_with("Hi! "));
    assert!(message.ends_with("https://cartoncaps.link/abfilefa90p?referral_code=AB12CD"));

    let share = server
        .get("/api/referrals/invite-msg")
        .add_query_param("channel", "SHARE")
        .add_query_param("referral_code", "AB12CD")
        .await
        .json::<String>();
    assert!(share.starts_with("Hey\n"));
}

#[tokio::test]
async fn test_statistics() {
    let server = common::create_test_server();
    let code = common::referral_code_for(&server, "U1").await;

    for name in ["Jose", "Ana", "Luis"] {
        common::add_referral(&server, "U1", name, "SMS", &code).await;
    }

    server
        .put("/api/referrals")
        .add_query_param("referral_code", &code)
        .add_query_param("name", "Ana")
        .add_query_param("status", "Completed")
        .await
        .assert_status_ok();

    let response = server
        .get("/api/referrals/stats")
        .add_query_param("uid", "U1")
        .await;
    response.assert_status_ok();

    let stats = response.json::<StatisticsResponse>();
    assert_eq!(stats.uid, "U1");
    assert_eq!(stats.total_sent, 3);
    assert_eq!(stats.total_completed, 1);
    assert_eq!(stats.total_pending, 2);
}

#[tokio::test]
async fn test_delete_user_referrals() {
    let server = common::create_test_server();
    let code = common::referral_code_for(&server, "U1").await;
    common::add_referral(&server, "U1", "Jose", "SMS", &code).await;
    common::add_referral(&server, "U1", "Ana", "EMAIL", &code).await;

    let response = server.delete("/api/referrals/user/U1").await;
    response.assert_status_ok();
    assert!(response.json::<bool>());

    let referrals = server
        .get("/api/referrals/list/U1")
        .await
        .json::<Vec<ReferralResponse>>();
    assert!(referrals.is_empty());

    // Deleting again is a no-op that still succeeds.
    assert!(server.delete("/api/referrals/user/U1").await.json::<bool>());
}

#[tokio::test]
async fn test_list_for_unknown_user_is_empty() {
    let server = common::create_test_server();

    let response = server.get("/api/referrals/list/NOBODY").await;

    response.assert_status_ok();
    assert!(response.json::<Vec<ReferralResponse>>().is_empty());
}
