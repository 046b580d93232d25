//! Turns raw registry payloads into [`TraderRecord`]s and checks that a
//! returned trader really is the one that was asked for.

use crate::types::{LookupKey, LookupRequest, RawTrader, TraderRecord};

/// Placeholder the registry uses for "no value".
const NOT_AVAILABLE: &str = "NA";

/// Normalizes a raw trader. `None` stays `None`.
///
/// `Tin`, `MedNo` and `NID` carrying the `"NA"` placeholder become absent.
/// Other fields are copied as-is.
pub fn normalize(raw: Option<RawTrader>) -> Option<TraderRecord> {
    let raw = raw?;
    Some(TraderRecord {
        code: raw.code,
        name: raw.name,
        address: raw.address,
        sector: raw.sector,
        med_number: drop_placeholder(raw.med_no),
        tin: drop_placeholder(raw.tin),
        email: raw.email,
        national_id: drop_placeholder(raw.nid),
    })
}

fn drop_placeholder(value: Option<String>) -> Option<String> {
    value.filter(|v| v != NOT_AVAILABLE)
}

/// Returns true when the raw trader's field for the request key, trimmed,
/// equals the requested identifier exactly.
///
/// Some endpoints answer with the closest match rather than an exact one, so
/// a trader whose key differs must be treated as not found. An absent field
/// compares as the empty string.
pub fn matches_identifier(raw: &RawTrader, request: &LookupRequest<'_>) -> bool {
    let field = match request.key {
        LookupKey::MedNumber => raw.med_no.as_deref(),
        LookupKey::CNumber => raw.code.as_deref(),
    };
    field.unwrap_or_default().trim() == request.identifier
}
