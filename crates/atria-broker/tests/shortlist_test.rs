//! Integration tests for the shortlist and comparison set.

use atria_broker::{RECOMMENDED_COMPARE_LIMIT, Shortlist};
use atria_core::error::AtriaError;
use atria_core::models::shortlist::ShortlistEntry;

fn entry(id: &str, name: &str, location: &str) -> ShortlistEntry {
    ShortlistEntry {
        property_id: id.into(),
        name: name.into(),
        price_label: "AED 1.2M".into(),
        location: location.into(),
        unit_range: "1-3 BR Apartments".into(),
        badge: None,
    }
}

fn seeded() -> Shortlist {
    let mut shortlist = Shortlist::new();
    shortlist.add(entry("p1", "IL VENTO", "Dubai Maritime City"));
    shortlist.add(entry("p2", "Marina Heights Tower", "Dubai Marina"));
    shortlist.add(entry("p3", "Sky Gardens Residences", "DIFC"));
    shortlist
}

#[test]
fn add_is_idempotent_per_property_id() {
    let mut shortlist = seeded();
    assert_eq!(shortlist.len(), 3);

    let added = shortlist.add(entry("p2", "Marina Heights Tower", "Dubai Marina"));
    assert!(!added);
    assert_eq!(shortlist.len(), 3);
}

#[test]
fn remove_then_undo_restores_the_original_order() {
    let mut shortlist = seeded();
    let order_before: Vec<String> = shortlist
        .entries()
        .iter()
        .map(|e| e.property_id.clone())
        .collect();

    shortlist.remove("p2").unwrap();
    assert_eq!(shortlist.len(), 2);
    assert!(!shortlist.contains("p2"));

    let restored = shortlist.undo().unwrap();
    assert_eq!(restored.property_id, "p2");

    let order_after: Vec<String> = shortlist
        .entries()
        .iter()
        .map(|e| e.property_id.clone())
        .collect();
    assert_eq!(order_before, order_after);
}

#[test]
fn undo_is_single_level() {
    let mut shortlist = seeded();
    shortlist.remove("p1").unwrap();
    shortlist.remove("p3").unwrap();

    // Only the most recent removal is recoverable.
    assert_eq!(shortlist.undo().unwrap().property_id, "p3");
    assert!(shortlist.undo().is_none());
    assert!(!shortlist.contains("p1"));
}

#[test]
fn readding_the_removed_property_invalidates_undo() {
    let mut shortlist = seeded();
    shortlist.remove("p2").unwrap();
    shortlist.add(entry("p2", "Marina Heights Tower", "Dubai Marina"));

    // The re-add superseded the removal; undoing it would leave two
    // entries for the same property id.
    assert!(shortlist.undo().is_none());
    let p2_count = shortlist
        .entries()
        .iter()
        .filter(|e| e.property_id == "p2")
        .count();
    assert_eq!(p2_count, 1);
}

#[test]
fn removing_an_unknown_property_is_not_found() {
    let mut shortlist = seeded();
    let err = shortlist.remove("p9").unwrap_err();
    assert!(matches!(err, AtriaError::NotFound { .. }));
}

#[test]
fn search_matches_name_and_location() {
    let shortlist = seeded();

    let by_name = shortlist.search("vento");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].property_id, "p1");

    let by_location = shortlist.search("dubai");
    assert_eq!(by_location.len(), 2);
}

#[test]
fn compare_keeps_caller_order_and_skips_unknown_ids() {
    let shortlist = seeded();

    let selection = shortlist.compare(&["p3", "p1", "p9"]);
    let ids: Vec<&str> = selection.iter().map(|e| e.property_id.as_str()).collect();
    assert_eq!(ids, ["p3", "p1"]);
}

#[test]
fn compare_cap_is_a_hint_not_a_limit() {
    let mut shortlist = seeded();
    shortlist.add(entry("p4", "Bay East Tower", "Business Bay"));
    shortlist.add(entry("p5", "Palm Residence", "Palm Jumeirah"));

    let selection = shortlist.compare(&["p1", "p2", "p3", "p4", "p5"]);
    assert!(selection.len() > RECOMMENDED_COMPARE_LIMIT);
    assert_eq!(selection.len(), 5);
}
