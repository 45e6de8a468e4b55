//! Validation and record assembly.

use crate::error::IntakeError;
use crate::types::{FilterSet, PushToken, SubscriptionRecord, Timestamp};

use super::parse::parse_list;

/// Validate the raw form fields against the acquired token.
///
/// The token check dominates: a missing token cannot be fixed by editing
/// the form, only by retrying acquisition, so it is reported before any
/// parsing happens. Deterministic and side-effect-free.
pub fn validate(
    companies_raw: &str,
    keywords_raw: &str,
    token: Option<&PushToken>,
) -> Result<FilterSet, IntakeError> {
    if token.is_none() {
        return Err(IntakeError::NoToken);
    }

    let companies = parse_list(companies_raw);
    if companies.is_empty() {
        return Err(IntakeError::NoCompanies);
    }

    let keywords = parse_list(keywords_raw);

    Ok(FilterSet {
        companies,
        // Reserved; not exposed on the current input surface.
        roles: Vec::new(),
        keywords,
    })
}

/// Assemble a subscription record from validated parts.
///
/// Pure assembly; validation is the caller's responsibility via
/// [`validate`]. `active` is always true at creation.
pub fn build_record(token: PushToken, filters: FilterSet, now: Timestamp) -> SubscriptionRecord {
    SubscriptionRecord {
        push_token: token,
        filters,
        active: true,
        created_at: now,
    }
}
