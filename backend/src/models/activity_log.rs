//! Models for the append-only activity trail written alongside every
//! evidence mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
/// One audit entry. Rows are only ever inserted, in the same transaction as
/// the mutation they describe.
pub struct ActivityLog {
    pub id: String,
    /// Account that performed the action.
    pub user_id: String,
    pub action: ActivityAction,
    /// Action-specific context, at minimum the evidence id and title.
    pub metadata: Json<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
/// Actions recorded in the activity trail.
pub enum ActivityAction {
    EvidenceUploaded,
    EvidenceReviewed,
    EvidenceDeleted,
}

impl ActivityAction {
    /// Returns the canonical database representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::EvidenceUploaded => "EVIDENCE_UPLOADED",
            ActivityAction::EvidenceReviewed => "EVIDENCE_REVIEWED",
            ActivityAction::EvidenceDeleted => "EVIDENCE_DELETED",
        }
    }
}

impl Serialize for ActivityAction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ActivityAction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "EVIDENCE_UPLOADED" => Ok(ActivityAction::EvidenceUploaded),
            "EVIDENCE_REVIEWED" => Ok(ActivityAction::EvidenceReviewed),
            "EVIDENCE_DELETED" => Ok(ActivityAction::EvidenceDeleted),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &[
                    "EVIDENCE_UPLOADED",
                    "EVIDENCE_REVIEWED",
                    "EVIDENCE_DELETED",
                ],
            )),
        }
    }
}

impl ActivityLog {
    /// Constructs a new entry stamped with the current time.
    pub fn new(user_id: String, action: ActivityAction, metadata: Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            action,
            metadata: Json(metadata),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn actions_serialize_to_canonical_values() {
        assert_eq!(
            serde_json::to_value(ActivityAction::EvidenceUploaded).unwrap(),
            "EVIDENCE_UPLOADED"
        );
        assert_eq!(
            serde_json::to_value(ActivityAction::EvidenceReviewed).unwrap(),
            "EVIDENCE_REVIEWED"
        );
        assert_eq!(
            serde_json::to_value(ActivityAction::EvidenceDeleted).unwrap(),
            "EVIDENCE_DELETED"
        );
        assert!(serde_json::from_str::<ActivityAction>("\"EVIDENCE_EDITED\"").is_err());
    }

    #[test]
    fn entries_carry_structured_metadata() {
        let entry = ActivityLog::new(
            "u1".to_string(),
            ActivityAction::EvidenceReviewed,
            json!({ "evidenceId": "e1", "oldStatus": "UNDER_REVIEW", "newStatus": "APPROVED" }),
        );
        assert_eq!(entry.metadata.0["newStatus"], "APPROVED");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["action"], "EVIDENCE_REVIEWED");
        assert_eq!(json["userId"], "u1");
    }
}
