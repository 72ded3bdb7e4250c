//! Common validation rules shared across request payloads.

use url::Url;
use validator::ValidationError;

use crate::models::evidence::EvidenceType;

/// Validates an evidence title.
///
/// Requirements:
/// - At least 3 characters after trimming
/// - At most 500 characters
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let trimmed = title.trim();
    if trimmed.chars().count() < 3 {
        return Err(
            ValidationError::new("title_too_short")
                .with_message("Title must be at least 3 characters".into()),
        );
    }
    if trimmed.chars().count() > 500 {
        return Err(ValidationError::new("title_too_long")
            .with_message("Title must be at most 500 characters".into()));
    }
    Ok(())
}

/// Validates an external evidence URL.
///
/// Requirements:
/// - Parses as an absolute URL
/// - Uses the http or https scheme
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(url)
        .map_err(|_| ValidationError::new("url_invalid").with_message("Invalid URL".into()))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ValidationError::new("url_scheme_invalid")
            .with_message("URL must use http or https".into()));
    }
    Ok(())
}

/// Cross-field rule tying the evidence type to its payload fields: `FILE`
/// records carry a file and no URL, `LINK` records the opposite. Returns one
/// message per violation, empty when the combination is consistent.
pub fn evidence_source_violations(
    evidence_type: EvidenceType,
    has_file: bool,
    has_url: bool,
) -> Vec<String> {
    let mut violations = Vec::new();
    match evidence_type {
        EvidenceType::File => {
            if !has_file {
                violations.push("file: File is required when type is FILE".to_string());
            }
            if has_url {
                violations.push("url: URL must be omitted when type is FILE".to_string());
            }
        }
        EvidenceType::Link => {
            if !has_url {
                violations.push("url: URL is required when type is LINK".to_string());
            }
            if has_file {
                violations.push("file: File must be omitted when type is LINK".to_string());
            }
        }
    }
    violations
}
