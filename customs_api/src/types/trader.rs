//! Trader records: the upstream shape and the normalized record handed to callers.

use serde::{Deserialize, Serialize};

/// A trader as the registry returns it, before placeholder cleanup.
///
/// Every key is optional and unknown keys are ignored, so a partial or
/// extended payload never fails to deserialize.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTrader {
    #[serde(rename = "Code", default)]
    pub code: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Address", default)]
    pub address: Option<String>,
    #[serde(rename = "Sector", default)]
    pub sector: Option<String>,
    #[serde(rename = "MedNo", default)]
    pub med_no: Option<String>,
    #[serde(rename = "Tin", default)]
    pub tin: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "NID", default)]
    pub nid: Option<String>,
}

impl From<[String; 6]> for RawTrader {
    /// Maps a company search row (`code, name, address, sector, medNumber,
    /// tin`) onto the upstream field names.
    fn from(cells: [String; 6]) -> Self {
        let [code, name, address, sector, med_no, tin] = cells;
        Self {
            code: Some(code),
            name: Some(name),
            address: Some(address),
            sector: Some(sector),
            med_no: Some(med_no),
            tin: Some(tin),
            email: None,
            nid: None,
        }
    }
}

/// A registered trader, as returned by the lookup operations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraderRecord {
    /// The C number.
    pub code: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub sector: Option<String>,
    /// The medical/trader registration number.
    pub med_number: Option<String>,
    /// Taxpayer identification number.
    pub tin: Option<String>,
    /// Only populated by the JSON integrations.
    pub email: Option<String>,
    pub national_id: Option<String>,
}
