//! PostgreSQL implementation of referral repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Channel, ParseEnumError, Referral, ReferralKey, ReferralStatus};
use crate::domain::repositories::ReferralRepository;
use crate::error::AppError;

const SELECT_REFERRAL: &str = r#"
    SELECT referral_id, uid, name, method, referral_code, status, created_at, updated_at
    FROM referrals
"#;

/// Raw `referrals` row; enum columns are stored as text.
#[derive(Debug, FromRow)]
struct ReferralRow {
    referral_id: String,
    uid: String,
    name: String,
    method: String,
    referral_code: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ReferralRow> for Referral {
    type Error = AppError;

    fn try_from(row: ReferralRow) -> Result<Self, Self::Error> {
        let corrupt = |e: ParseEnumError| {
            AppError::internal(
                "Corrupt referral row",
                json!({ "referral_id": row.referral_id, "reason": e.to_string() }),
            )
        };

        let channel: Channel = row.method.parse().map_err(corrupt)?;
        let status: ReferralStatus = row.status.parse().map_err(corrupt)?;

        Ok(Referral {
            id: row.referral_id,
            referrer_uid: row.uid,
            name: row.name,
            channel,
            referral_code: row.referral_code,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_referrals(rows: Vec<ReferralRow>) -> Result<Vec<Referral>, AppError> {
    rows.into_iter().map(Referral::try_from).collect()
}

/// PostgreSQL repository for referral storage and retrieval.
pub struct PgReferralRepository {
    pool: Arc<PgPool>,
}

impl PgReferralRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReferralRepository for PgReferralRepository {
    async fn get_by_id(&self, id: &str) -> Result<Option<Referral>, AppError> {
        let row = sqlx::query_as::<_, ReferralRow>(&format!(
            "{SELECT_REFERRAL} WHERE referral_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Referral::try_from).transpose()
    }

    async fn get_all(&self) -> Result<Vec<Referral>, AppError> {
        let rows = sqlx::query_as::<_, ReferralRow>(&format!(
            "{SELECT_REFERRAL} ORDER BY created_at"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        into_referrals(rows)
    }

    async fn find_by_user(&self, referrer_uid: &str) -> Result<Vec<Referral>, AppError> {
        let rows = sqlx::query_as::<_, ReferralRow>(&format!(
            "{SELECT_REFERRAL} WHERE uid = $1 ORDER BY created_at"
        ))
        .bind(referrer_uid)
        .fetch_all(self.pool.as_ref())
        .await?;

        into_referrals(rows)
    }

    async fn find_by_key(&self, key: &ReferralKey) -> Result<Vec<Referral>, AppError> {
        let rows = sqlx::query_as::<_, ReferralRow>(&format!(
            "{SELECT_REFERRAL} WHERE uid = $1 AND name = $2 AND method = $3"
        ))
        .bind(&key.referrer_uid)
        .bind(&key.name)
        .bind(key.channel.as_str())
        .fetch_all(self.pool.as_ref())
        .await?;

        into_referrals(rows)
    }

    async fn find_by_code_and_name(
        &self,
        referral_code: &str,
        name: &str,
    ) -> Result<Option<Referral>, AppError> {
        let row = sqlx::query_as::<_, ReferralRow>(&format!(
            "{SELECT_REFERRAL} WHERE referral_code = $1 AND name = $2 ORDER BY created_at LIMIT 1"
        ))
        .bind(referral_code)
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Referral::try_from).transpose()
    }

    async fn add(&self, referral: Referral) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO referrals
                (referral_id, uid, name, method, referral_code, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(&referral.id)
        .bind(&referral.referrer_uid)
        .bind(&referral.name)
        .bind(referral.channel.as_str())
        .bind(&referral.referral_code)
        .bind(referral.status.as_str())
        .bind(referral.created_at)
        .bind(referral.updated_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn update(&self, referral: Referral) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE referrals
            SET uid = $2, name = $3, method = $4, referral_code = $5, status = $6, updated_at = $7
            WHERE referral_id = $1
            "#,
        )
        .bind(&referral.id)
        .bind(&referral.referrer_uid)
        .bind(&referral.name)
        .bind(referral.channel.as_str())
        .bind(&referral.referral_code)
        .bind(referral.status.as_str())
        .bind(referral.updated_at)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Referral not found",
                json!({ "id": referral.id }),
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM referrals WHERE referral_id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
