use serde::{Deserialize, Serialize};

/// One row of the commune reference table.
///
/// Multiple communes may share a postal code and no uniqueness is enforced;
/// the resolver relies on the reference table's input order for tie-breaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommuneRecord {
    /// INSEE code identifying the commune.
    pub insee_code: String,
    /// Postal code kept as a string so leading zeros survive.
    pub postal_code: String,
    /// Display name as it appears in the source table.
    pub name: String,
    /// Canonical join key derived from the display name.
    pub normalized_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One roster entry to be geocoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Postal code kept as a string so leading zeros survive.
    pub postal_code: String,
    /// Raw commune name as entered, retained for diagnostics.
    pub commune: String,
    /// Canonical join key derived from the raw name.
    pub normalized_name: String,
}

impl Participant {
    /// Creates a participant, deriving the join key from the raw name.
    pub fn new(postal_code: impl Into<String>, commune: impl Into<String>) -> Self {
        let commune = commune.into();
        let normalized_name = crate::normalize::normalize_name(&commune);
        Self {
            postal_code: postal_code.into(),
            commune,
            normalized_name,
        }
    }
}

/// A resolved coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}
