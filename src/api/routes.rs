//! API route configuration.

use crate::api::handlers::{
    attribute_referral_handler, create_referral_handler, delete_user_referrals_handler,
    get_referral_handler, invite_message_handler, list_referrals_handler, referral_code_handler,
    referral_stats_handler, update_referral_status_handler, validate_code_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Referral and user routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /referrals?referral_code=&name=`         - Find one referral
/// - `POST   /referrals`                              - Record a referral
/// - `PUT    /referrals?referral_code=&name=&status=` - Change a referral's status
/// - `GET    /referrals/list/{uid}`                   - Referrals sent by a user
/// - `GET    /referrals/invite-msg?channel=&referral_code=` - Invitation text
/// - `GET    /referrals/stats?uid=`                   - Referral statistics
/// - `DELETE /referrals/user/{uid}`                   - Delete a user's referrals
/// - `GET    /user/code/{uid}`                        - Get or create a referral code
/// - `GET    /user/validate/{referral_code}`          - Check code format
/// - `POST   /user/attribute`                         - Attribute a referee
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/referrals",
            get(get_referral_handler)
                .post(create_referral_handler)
                .put(update_referral_status_handler),
        )
        .route("/referrals/list/{uid}", get(list_referrals_handler))
        .route("/referrals/invite-msg", get(invite_message_handler))
        .route("/referrals/stats", get(referral_stats_handler))
        .route("/referrals/user/{uid}", delete(delete_user_referrals_handler))
        .route("/user/code/{uid}", get(referral_code_handler))
        .route("/user/validate/{referral_code}", get(validate_code_handler))
        .route("/user/attribute", post(attribute_referral_handler))
}
