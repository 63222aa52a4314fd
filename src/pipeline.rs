use std::path::Path;

use tracing::{info, instrument, warn};

use crate::error::Result;
use crate::io::csv_read;
use crate::render;
use crate::render::features;
use crate::resolve::{self, CommuneIndex, Resolution};

/// Runs the whole pipeline: load both tables, resolve the roster, render the
/// matched coordinates to `output`.
#[instrument(
    level = "info",
    skip_all,
    fields(communes = %communes.display(), participants = %participants.display(), output = %output.display())
)]
pub fn generate_map(
    communes: &Path,
    participants: &Path,
    basemap: Option<&Path>,
    output: &Path,
) -> Result<()> {
    let resolution = resolve_roster(communes, participants)?;

    let layers = match basemap {
        Some(path) => features::load_base_layers(path)?,
        None => Vec::new(),
    };

    render::render_map(&resolution.coords, &layers, output)
}

/// Loads both tables and resolves the roster, without rendering.
///
/// Split out from [`generate_map`] so the join logic can be exercised
/// against temporary files without producing an image.
#[instrument(
    level = "info",
    skip_all,
    fields(communes = %communes.display(), participants = %participants.display())
)]
pub fn resolve_roster(communes: &Path, participants: &Path) -> Result<Resolution> {
    let records = csv_read::load_communes(communes)?;
    info!(commune_count = records.len(), "loaded commune reference table");
    let index = CommuneIndex::new(records);

    let roster = csv_read::load_participants(participants)?;
    info!(participant_count = roster.len(), "loaded roster");

    let resolution = resolve::resolve_all(&index, &roster);
    for miss in &resolution.unmatched {
        warn!(
            postal_code = %miss.postal_code,
            commune = %miss.commune,
            "failed to find a matching commune"
        );
    }
    info!(
        matched = resolution.coords.len(),
        unmatched = resolution.unmatched.len(),
        "roster resolved"
    );
    Ok(resolution)
}
