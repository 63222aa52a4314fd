use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::model::{CommuneRecord, Participant};
use crate::normalize::normalize_name;

/// Raw shape of a reference-table row. Every field is optional so that
/// incomplete rows deserialize cleanly and can be dropped instead of
/// aborting the load.
#[derive(Debug, Deserialize)]
struct RawCommuneRow {
    code_insee: Option<String>,
    code_postal: Option<String>,
    nom_commune: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawParticipantRow {
    code_postal: Option<String>,
    commune: Option<String>,
}

/// Loads the commune reference table.
///
/// The file must carry at least the columns `code_insee`, `code_postal`,
/// `nom_commune`, `latitude`, and `longitude`; extra columns are ignored.
/// Rows missing any required field are dropped. Each surviving row gets a
/// normalized commune name computed for joining.
pub fn load_communes(path: &Path) -> Result<Vec<CommuneRecord>> {
    let mut reader = csv::Reader::from_reader(File::open(path)?);
    let headers = reader.headers()?.clone();
    debug!(?headers, "commune table columns");

    let mut records = Vec::new();
    for row in reader.deserialize::<RawCommuneRow>() {
        let row = row?;
        let (Some(insee_code), Some(postal_code), Some(name), Some(latitude), Some(longitude)) =
            (row.code_insee, row.code_postal, row.nom_commune, row.latitude, row.longitude)
        else {
            continue;
        };
        let normalized_name = normalize_name(&name);
        records.push(CommuneRecord {
            insee_code,
            postal_code,
            name,
            normalized_name,
            latitude,
            longitude,
        });
    }
    Ok(records)
}

/// Loads the participant roster.
///
/// The file must carry at least the columns `code_postal` and `commune`.
/// Rows missing either field are dropped; the raw commune name is retained
/// alongside its normalized form.
pub fn load_participants(path: &Path) -> Result<Vec<Participant>> {
    let mut reader = csv::Reader::from_reader(File::open(path)?);
    let headers = reader.headers()?.clone();
    debug!(?headers, "roster columns");

    let mut participants = Vec::new();
    for row in reader.deserialize::<RawParticipantRow>() {
        let row = row?;
        let (Some(postal_code), Some(commune)) = (row.code_postal, row.commune) else {
            continue;
        };
        participants.push(Participant::new(postal_code, commune));
    }
    Ok(participants)
}
