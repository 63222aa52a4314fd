use carte_inscriptions::model::{CommuneRecord, GeoPoint, Participant};
use carte_inscriptions::normalize::normalize_name;
use carte_inscriptions::resolve::{resolve_all, CommuneIndex};

fn record(insee: &str, postal: &str, name: &str, latitude: f64, longitude: f64) -> CommuneRecord {
    CommuneRecord {
        insee_code: insee.to_string(),
        postal_code: postal.to_string(),
        name: name.to_string(),
        normalized_name: normalize_name(name),
        latitude,
        longitude,
    }
}

#[test]
fn normalize_strips_accents() {
    assert_eq!(normalize_name("Évry"), "evry");
    assert_eq!(normalize_name("Évry"), normalize_name("Evry"));
}

#[test]
fn normalize_collapses_separators() {
    assert_eq!(normalize_name("Saint--Étienne"), "saint etienne");
    assert_eq!(normalize_name("Saint Etienne"), "saint etienne");
    assert_eq!(normalize_name("  Saint -  Étienne "), "saint etienne");
}

#[test]
fn normalize_is_idempotent() {
    for raw in ["Évry", "Saint--Étienne", "Bourg-en-Bresse", "Paris ", "Aix-"] {
        let once = normalize_name(raw);
        assert_eq!(normalize_name(&once), once, "not idempotent for {raw:?}");
    }
}

#[test]
fn resolver_accepts_prefix_matches_only() {
    let index = CommuneIndex::new(vec![record(
        "76575",
        "76800",
        "Saint-Étienne-du-Rouvray",
        49.38,
        1.10,
    )]);

    let partial = Participant::new("76800", "Saint-Étienne");
    assert!(index.resolve(&partial).is_some());

    let not_a_prefix = Participant::new("76800", "Étienne");
    assert!(index.resolve(&not_a_prefix).is_none());
}

#[test]
fn resolver_gates_on_postal_code() {
    let index = CommuneIndex::new(vec![
        record("93066", "93200", "Saint-Denis", 48.93, 2.35),
        record("97411", "97400", "Saint-Denis", -20.87, 55.44),
    ]);

    let reunion = Participant::new("97400", "Saint-Denis");
    let matched = index.resolve(&reunion).expect("match in the right postal code");
    assert_eq!(matched.insee_code, "97411");

    let nowhere = Participant::new("97410", "Saint-Denis");
    assert!(index.resolve(&nowhere).is_none());
}

#[test]
fn resolver_tie_break_is_first_in_input_order() {
    let index = CommuneIndex::new(vec![
        record("97411", "97400", "Saint-Denis", -20.87, 55.44),
        record("97499", "97400", "Saint-Denis-les-Bains", -21.00, 55.50),
    ]);

    let participant = Participant::new("97400", "Saint-Denis");
    let matched = index.resolve(&participant).expect("prefix match");
    assert_eq!(matched.insee_code, "97411");
}

#[test]
fn sentinel_pair_is_not_reported_as_unmatched() {
    let index = CommuneIndex::new(vec![record("75056", "75001", "Paris", 48.85, 2.35)]);
    let roster = vec![
        Participant::new("Sans réponse", "Sans réponse"),
        Participant::new("99999", "Nowhere"),
    ];

    let resolution = resolve_all(&index, &roster);
    assert!(resolution.coords.is_empty());
    assert_eq!(resolution.unmatched.len(), 1);
    assert_eq!(resolution.unmatched[0].postal_code, "99999");
    assert_eq!(resolution.unmatched[0].commune, "Nowhere");
}

#[test]
fn two_row_roster_resolves_to_single_coordinate() {
    let index = CommuneIndex::new(vec![
        record("75056", "75001", "Paris", 48.85, 2.35),
        record("13055", "13001", "Marseille", 43.29, 5.37),
    ]);
    let roster = vec![
        Participant::new("75001", "Paris"),
        Participant::new("99999", "Nowhere"),
    ];

    let resolution = resolve_all(&index, &roster);
    assert_eq!(
        resolution.coords,
        vec![GeoPoint {
            latitude: 48.85,
            longitude: 2.35,
        }]
    );
    assert_eq!(resolution.unmatched.len(), 1);
}
