//! Handlers for user referral-code endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::users::{AttributeRequest, ReferralCodeResponse};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::referral_code::is_valid_code;

/// Returns a user's referral code, generating it on first request.
///
/// # Endpoint
///
/// `GET /api/user/code/{uid}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn referral_code_handler(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<ReferralCodeResponse>, AppError> {
    let referral_code = state.user_service.get_or_create_referral_code(&uid).await?;

    if referral_code.is_empty() {
        return Err(AppError::not_found("User not found", json!({ "uid": uid })));
    }

    Ok(Json(ReferralCodeResponse { uid, referral_code }))
}

/// Checks whether a string is a well-formed referral code.
///
/// # Endpoint
///
/// `GET /api/user/validate/{referral_code}`
///
/// Only the format is checked, not whether any user owns the code.
pub async fn validate_code_handler(Path(referral_code): Path<String>) -> Json<bool> {
    Json(is_valid_code(&referral_code))
}

/// Attributes a signed-up user to the referrer owning `referral_code`.
///
/// # Endpoint
///
/// `POST /api/user/attribute`
///
/// # Request Body
///
/// ```json
/// {
///   "referral_code": "NAQXC0",
///   "referee_uid": "U2"
/// }
/// ```
///
/// # Response
///
/// `true` when attributed, `false` when the referee does not exist.
pub async fn attribute_referral_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AttributeRequest>,
) -> Result<Json<bool>, AppError> {
    let attributed = state
        .user_service
        .attribute_referral(&payload.referral_code, &payload.referee_uid)
        .await?;

    Ok(Json(attributed))
}
