//! Repository functions for the activity trail.

use sqlx::postgres::PgTransaction;

use crate::models::activity_log::ActivityLog;

/// Appends one entry inside the caller's transaction so the trail commits or
/// rolls back together with the mutation it describes.
pub async fn insert_activity_log(
    tx: &mut PgTransaction<'_>,
    entry: &ActivityLog,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO activity_logs (id, user_id, action, metadata, created_at) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(&entry.id)
    .bind(&entry.user_id)
    .bind(&entry.action)
    .bind(&entry.metadata)
    .bind(entry.created_at)
    .execute(tx.as_mut())
    .await
    .map(|_| ())
}
