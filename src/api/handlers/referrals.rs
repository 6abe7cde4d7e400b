//! Handlers for referral endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::referrals::{
    InviteMessageQuery, ReferralAddRequest, ReferralLookupQuery, ReferralResponse,
    StatisticsResponse, StatsQuery, UpdateStatusQuery,
};
use crate::api::extract::{ValidatedJson, ValidatedQuery};
use crate::domain::entities::{Channel, NewReferral, ReferralStatus};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::invite_message::prepare_message;

/// Lists the referrals sent by a user.
///
/// # Endpoint
///
/// `GET /api/referrals/list/{uid}`
///
/// Unknown users yield an empty array.
pub async fn list_referrals_handler(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<ReferralResponse>>, AppError> {
    let referrals = state.referral_service.list_by_user(&uid).await?;

    Ok(Json(
        referrals.into_iter().map(ReferralResponse::from).collect(),
    ))
}

/// Records a referral.
///
/// # Endpoint
///
/// `POST /api/referrals`
///
/// # Request Body
///
/// ```json
/// {
///   "uid": "U1",
///   "name": "Jose",
///   "channel": "EMAIL",
///   "referral_code": "NAQXC0"
/// }
/// ```
///
/// # Response
///
/// `true` when recorded, `false` when the user already invited this person
/// through this channel.
///
/// # Errors
///
/// Returns 400 if the body is malformed or fails validation.
pub async fn create_referral_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ReferralAddRequest>,
) -> Result<Json<bool>, AppError> {
    let channel: Channel = payload.channel.parse()?;

    let created = state
        .referral_service
        .create(NewReferral {
            referrer_uid: payload.uid,
            name: payload.name,
            channel,
            referral_code: payload.referral_code,
        })
        .await?;

    Ok(Json(created))
}

/// Finds the referral sent with a code to a named person.
///
/// # Endpoint
///
/// `GET /api/referrals?referral_code={code}&name={name}`
///
/// # Errors
///
/// Returns 400 if the code is malformed.
/// Returns 404 if no referral matches.
pub async fn get_referral_handler(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ReferralLookupQuery>,
) -> Result<Json<ReferralResponse>, AppError> {
    let referral = state
        .referral_service
        .find_one(&query.referral_code, &query.name)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                "Referral not found",
                json!({ "referral_code": query.referral_code, "name": query.name }),
            )
        })?;

    Ok(Json(ReferralResponse::from(referral)))
}

/// Moves a referral to a new status.
///
/// # Endpoint
///
/// `PUT /api/referrals?referral_code={code}&name={name}&status={status}`
///
/// # Response
///
/// `true` when updated, `false` when no referral matches.
///
/// # Errors
///
/// Returns 400 if validation fails or the status is unknown.
pub async fn update_referral_status_handler(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<UpdateStatusQuery>,
) -> Result<Json<bool>, AppError> {
    let status: ReferralStatus = query.status.parse()?;

    let updated = state
        .referral_service
        .update_status(&query.referral_code, &query.name, status)
        .await?;

    Ok(Json(updated))
}

/// Composes the invitation text for a channel.
///
/// # Endpoint
///
/// `GET /api/referrals/invite-msg?channel={channel}&referral_code={code}`
///
/// Returns the message as a JSON string.
pub async fn invite_message_handler(
    ValidatedQuery(query): ValidatedQuery<InviteMessageQuery>,
) -> Result<Json<String>, AppError> {
    let channel: Channel = query.channel.parse()?;

    Ok(Json(prepare_message(channel, &query.referral_code)))
}

/// Returns aggregate referral counts for a user.
///
/// # Endpoint
///
/// `GET /api/referrals/stats?uid={uid}`
///
/// # Response
///
/// ```json
/// {
///   "uid": "U1",
///   "total_sent": 3,
///   "total_completed": 1,
///   "total_pending": 2
/// }
/// ```
pub async fn referral_stats_handler(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<StatsQuery>,
) -> Result<Json<StatisticsResponse>, AppError> {
    let stats = state.referral_service.statistics(&query.uid).await?;

    Ok(Json(StatisticsResponse::from(stats)))
}

/// Deletes every referral sent by a user.
///
/// # Endpoint
///
/// `DELETE /api/referrals/user/{uid}`
///
/// Returns `false` when storage fails part-way; referrals deleted before the
/// failure stay deleted.
pub async fn delete_user_referrals_handler(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Json<bool> {
    Json(state.referral_service.delete_all_for_user(&uid).await)
}
