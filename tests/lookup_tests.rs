//! Catalog lookup tests.
//!
//! These run against the bundled catalog through the crate-level
//! shortcuts, and against small fixture catalogs built from JSON.

use std::collections::HashSet;

use unusual_effects::{
    find_effect_by_id, find_effect_by_name, get_all_effects, get_effect_by_id,
    get_effect_by_name, get_effect_images, get_effects_by_series, get_effects_by_type,
    is_unusual, EffectCatalog, EffectId, EffectIds, EffectType,
};

/// A plain name maps to its single id.
#[test]
fn test_find_effect_by_name() {
    assert_eq!(find_effect_by_name("Sunbeams"), Some(&EffectIds::Single(EffectId::new(17))));
}

/// An id maps to its display name.
#[test]
fn test_find_effect_by_id() {
    assert_eq!(find_effect_by_id(14u32), Some("Scorching Flames"));
}

/// Unknown names and ids are absent, never errors.
#[test]
fn test_unknown_name_is_absent() {
    assert_eq!(find_effect_by_name("Banana Storm"), None);
    assert_eq!(find_effect_by_id(424_242u32), None);
    assert!(!is_unusual("Banana Storm"));
}

/// Team-colored variants share a name and each id maps back to it.
#[test]
fn test_showstopper_has_two_variants() {
    let ids = find_effect_by_name("Showstopper").expect("Showstopper should exist");

    assert!(ids.is_variant());
    assert_eq!(ids.len(), 2);
    for &id in ids.as_slice() {
        assert_eq!(find_effect_by_id(id), Some("Showstopper"));
    }
}

/// Ids, numeric text and names are all accepted as keys.
#[test]
fn test_is_unusual_by_id_and_name() {
    assert!(is_unusual(17u32));
    assert!(is_unusual("17"));
    assert!(is_unusual("Sunbeams"));
    assert!(is_unusual(EffectId::new(3002)));
}

/// Id and name lookups return the same record.
#[test]
fn test_get_effect_records() {
    let effect = get_effect_by_id(81u32).expect("Bonzo should exist");
    assert_eq!(effect.name, "Bonzo The All-Gnawing");
    assert_eq!(effect.effect_type, EffectType::Cosmetic);

    let by_name = get_effect_by_name("Bonzo The All-Gnawing").expect("Bonzo should exist");
    assert_eq!(by_name, effect);
}

/// Every bundled id appears once.
#[test]
fn test_get_all_effects_has_no_duplicates() {
    let all = get_all_effects();
    let ids: HashSet<_> = all.iter().map(|e| e.id).collect();
    assert_eq!(ids.len(), all.len());
}

/// Each effect belongs to exactly one type.
#[test]
fn test_get_effects_by_type_partitions_catalog() {
    let total: usize = EffectType::ALL
        .into_iter()
        .map(|t| get_effects_by_type(t).len())
        .sum();
    assert_eq!(total, get_all_effects().len());

    let weapons = get_effects_by_type(EffectType::Weapon);
    assert!(weapons.iter().any(|e| e.name == "Energy Orb"));
    assert!(weapons.iter().all(|e| e.effect_type == EffectType::Weapon));
}

/// Series filtering is an exact label match.
#[test]
fn test_get_effects_by_series() {
    let series = get_effects_by_series("Series 1");
    assert!(series.iter().any(|e| e.name == "Sunbeams"));
    assert!(series.iter().all(|e| e.series == "Series 1"));

    assert!(get_effects_by_series("No Such Series").is_empty());
}

/// Series results outlive a label built at runtime.
#[test]
fn test_get_effects_by_series_with_owned_label() {
    let label = format!("Series {}", 1);
    let series = get_effects_by_series(&label);
    drop(label);

    assert!(series.iter().any(|e| e.name == "Sunbeams"));
    assert_eq!(
        series.len(),
        get_all_effects().iter().filter(|e| e.series == "Series 1").count()
    );
}

/// Image URLs are built from the effect id.
#[test]
fn test_get_effect_images() {
    let bonzo = get_effect_images("Bonzo The All-Gnawing").expect("Bonzo should exist");

    assert_eq!(bonzo.name, "Bonzo The All-Gnawing");
    assert_eq!(bonzo.images.iter().count(), 3);
    assert!(bonzo
        .images
        .iter()
        .all(|url| url.starts_with("https://backpack.tf/images/440/particles/81_")));

    assert!(get_effect_images("Banana Storm").is_none());
}

/// A catalog parsed from JSON shares nothing with the bundled one.
#[test]
fn test_fixture_catalog_is_independent() {
    let catalog = EffectCatalog::from_json(
        r#"{"effects": [
            {"id": 900, "name": "Test Glow", "type": "cosmetic", "series": "Fixtures"},
            {"id": 901, "name": "Test Glow", "type": "cosmetic", "series": "Fixtures"}
        ]}"#,
    )
    .expect("fixture should parse");

    assert_eq!(catalog.len(), 2);
    assert!(catalog.find_effect_by_name("Sunbeams").is_none());
    assert_eq!(
        catalog.find_effect_by_name("Test Glow").map(EffectIds::as_slice),
        Some(&[EffectId::new(900), EffectId::new(901)][..])
    );
    assert!(!is_unusual(900u32));
}
