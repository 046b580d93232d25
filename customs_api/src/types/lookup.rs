//! Lookup keys: which registry identifier a lookup is keyed by.

use std::fmt;

/// The two identifiers a trader can be looked up by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupKey {
    /// The medical/trader registration number (`MedNo`).
    MedNumber,
    /// The registry-assigned C number (`Code`).
    CNumber,
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                LookupKey::MedNumber => "med number",
                LookupKey::CNumber => "C number",
            }
        )
    }
}

/// A single lookup: the identifier supplied by the caller and the key it
/// should be matched against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LookupRequest<'a> {
    pub identifier: &'a str,
    pub key: LookupKey,
}

impl<'a> LookupRequest<'a> {
    pub fn med_number(identifier: &'a str) -> Self {
        Self {
            identifier,
            key: LookupKey::MedNumber,
        }
    }

    pub fn c_number(identifier: &'a str) -> Self {
        Self {
            identifier,
            key: LookupKey::CNumber,
        }
    }
}
