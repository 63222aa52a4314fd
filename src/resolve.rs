use std::collections::HashMap;

use crate::model::{CommuneRecord, GeoPoint, Participant};

/// Postal-code value marking a roster entry where no answer was given.
pub const NO_RESPONSE_POSTAL: &str = "Sans réponse";
/// Normalized commune name of the no-response sentinel.
pub const NO_RESPONSE_NAME: &str = "sans reponse";

/// Reference table indexed by postal code.
///
/// Rows are bucketed per postal code but keep their original input order, so
/// "first matching row" below always means first in the source table.
#[derive(Debug, Default)]
pub struct CommuneIndex {
    by_postal: HashMap<String, Vec<CommuneRecord>>,
    len: usize,
}

impl CommuneIndex {
    pub fn new(records: Vec<CommuneRecord>) -> Self {
        let mut by_postal: HashMap<String, Vec<CommuneRecord>> = HashMap::new();
        let len = records.len();
        for record in records {
            by_postal
                .entry(record.postal_code.clone())
                .or_default()
                .push(record);
        }
        Self { by_postal, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolves a participant to a reference row.
    ///
    /// The postal code must match exactly; among the rows sharing it, the
    /// first whose normalized name starts with the participant's normalized
    /// name wins. Prefix matching tolerates partial or abbreviated commune
    /// names, at the cost of possible false positives when one commune's
    /// name is a prefix of another's under the same postal code.
    pub fn resolve(&self, participant: &Participant) -> Option<&CommuneRecord> {
        self.by_postal
            .get(&participant.postal_code)?
            .iter()
            .find(|record| record.normalized_name.starts_with(&participant.normalized_name))
    }
}

/// Outcome of resolving a whole roster.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Coordinates of matched participants, in roster order.
    pub coords: Vec<GeoPoint>,
    /// Participants that matched nothing, no-response sentinel excluded.
    pub unmatched: Vec<Participant>,
}

/// Resolves every roster entry against the reference index.
///
/// Matched entries contribute one coordinate each; unmatched entries are
/// collected for reporting, except the no-response sentinel which is
/// expected to miss and is silently skipped.
pub fn resolve_all(index: &CommuneIndex, participants: &[Participant]) -> Resolution {
    let mut resolution = Resolution::default();
    for participant in participants {
        match index.resolve(participant) {
            Some(record) => resolution.coords.push(GeoPoint {
                latitude: record.latitude,
                longitude: record.longitude,
            }),
            None if is_no_response(participant) => {}
            None => resolution.unmatched.push(participant.clone()),
        }
    }
    resolution
}

fn is_no_response(participant: &Participant) -> bool {
    participant.postal_code == NO_RESPONSE_POSTAL && participant.normalized_name == NO_RESPONSE_NAME
}
