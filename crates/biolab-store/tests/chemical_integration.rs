#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Integration tests for chemical CRUD and the quad-filter search.

use biolab_store::{
    delete_chemical, get_chemical, insert_chemical, list_chemicals, search_chemicals,
    update_chemical, ChemicalFields, ChemicalFilter, Store, StoreError,
};
use chrono::NaiveDate;

fn open_temp_store(dir: &tempfile::TempDir) -> Store {
    Store::open(dir.path().join("biolab.db")).expect("open should succeed")
}

fn sulfuric_acid() -> ChemicalFields {
    ChemicalFields {
        name: "Sulfuric Acid".into(),
        synonyms: "Oil of vitriol".into(),
        class: "Corrosive".into(),
        formula_info: "H2SO4 / 98.08".into(),
        quantity: "2.5 L".into(),
        hazard_code: "H314".into(),
        expiry: "2026-11-30".into(),
    }
}

fn acetic_acid() -> ChemicalFields {
    ChemicalFields {
        name: "Acetic Acid".into(),
        synonyms: "Ethanoic acid".into(),
        class: "Flammable".into(),
        formula_info: "CH3COOH / 60.05".into(),
        quantity: "1 L".into(),
        hazard_code: "H226".into(),
        expiry: "2025-03-15".into(),
    }
}

// -------------------------------------------------------------------------
// CRUD lifecycle
// -------------------------------------------------------------------------

#[test]
fn insert_then_get_round_trips_every_field() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_temp_store(&dir);

    let fields = sulfuric_acid();
    let id = insert_chemical(&store, &fields).expect("insert");

    let record = get_chemical(&store, id).expect("get");
    assert_eq!(record.id, id);
    assert_eq!(record.name, fields.name);
    assert_eq!(record.synonyms, fields.synonyms);
    assert_eq!(record.class, fields.class);
    assert_eq!(record.formula_info, fields.formula_info);
    assert_eq!(record.quantity, fields.quantity);
    assert_eq!(record.hazard_code, fields.hazard_code);
    assert_eq!(record.expiry, fields.expiry);
}

#[test]
fn identical_inserts_produce_distinct_ids() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_temp_store(&dir);

    let first = insert_chemical(&store, &sulfuric_acid()).expect("first");
    let second = insert_chemical(&store, &sulfuric_acid()).expect("second");
    assert_ne!(first, second);
    assert_eq!(list_chemicals(&store).expect("list").len(), 2);
}

#[test]
fn update_replaces_fields_and_keeps_the_id() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_temp_store(&dir);

    let id = insert_chemical(&store, &sulfuric_acid()).expect("insert");

    let mut changed = sulfuric_acid();
    changed.quantity = "1.0 L".into();
    changed.expiry = "2028-01-01".into();
    update_chemical(&store, id, &changed).expect("update");

    let record = get_chemical(&store, id).expect("get");
    assert_eq!(record.id, id);
    assert_eq!(record.quantity, "1.0 L");
    assert_eq!(record.expiry, "2028-01-01");

    // Exactly one row.
    assert_eq!(list_chemicals(&store).expect("list").len(), 1);
}

#[test]
fn delete_then_get_reports_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_temp_store(&dir);

    let id = insert_chemical(&store, &sulfuric_acid()).expect("insert");
    delete_chemical(&store, id).expect("delete");

    assert!(matches!(
        get_chemical(&store, id),
        Err(StoreError::RecordNotFound(missing)) if missing == id
    ));
    assert!(list_chemicals(&store).expect("list").is_empty());
}

#[test]
fn update_and_delete_of_missing_id_report_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_temp_store(&dir);

    assert!(matches!(
        update_chemical(&store, 99, &sulfuric_acid()),
        Err(StoreError::RecordNotFound(99))
    ));
    assert!(matches!(
        delete_chemical(&store, 99),
        Err(StoreError::RecordNotFound(99))
    ));
}

// -------------------------------------------------------------------------
// Expiry validation at the edge
// -------------------------------------------------------------------------

#[test]
fn malformed_expiry_is_rejected_before_insert() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_temp_store(&dir);

    for bad in ["2024-1-5", "not-a-date", "2024-13-01", ""] {
        let mut fields = sulfuric_acid();
        fields.expiry = bad.into();
        assert!(
            matches!(
                insert_chemical(&store, &fields),
                Err(StoreError::InvalidExpiry(_))
            ),
            "expiry {bad:?} should be rejected"
        );
    }
    assert!(list_chemicals(&store).expect("list").is_empty());
}

#[test]
fn malformed_expiry_is_rejected_before_update() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_temp_store(&dir);

    let id = insert_chemical(&store, &sulfuric_acid()).expect("insert");
    let mut fields = sulfuric_acid();
    fields.expiry = "someday".into();

    assert!(matches!(
        update_chemical(&store, id, &fields),
        Err(StoreError::InvalidExpiry(_))
    ));
    // Row untouched.
    assert_eq!(get_chemical(&store, id).expect("get").expiry, "2026-11-30");
}

// -------------------------------------------------------------------------
// Filtered search
// -------------------------------------------------------------------------

#[test]
fn empty_filter_returns_every_row() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_temp_store(&dir);

    insert_chemical(&store, &sulfuric_acid()).expect("insert");
    insert_chemical(&store, &acetic_acid()).expect("insert");

    let all = search_chemicals(&store, &ChemicalFilter::default()).expect("search");
    assert_eq!(all.len(), 2);
}

#[test]
fn name_filter_matches_substrings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_temp_store(&dir);

    insert_chemical(&store, &sulfuric_acid()).expect("insert");
    insert_chemical(&store, &acetic_acid()).expect("insert");

    let filter = ChemicalFilter {
        name: "acid".into(),
        ..ChemicalFilter::default()
    };
    // SQLite LIKE is ASCII case-insensitive, so "acid" hits both "Acid"s.
    let hits = search_chemicals(&store, &filter).expect("search");
    assert_eq!(hits.len(), 2);
}

#[test]
fn combined_filters_use_and_semantics() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_temp_store(&dir);

    insert_chemical(&store, &sulfuric_acid()).expect("insert");
    insert_chemical(&store, &acetic_acid()).expect("insert");

    let filter = ChemicalFilter {
        name: "Acid".into(),
        class: "Corrosive".into(),
        ..ChemicalFilter::default()
    };
    let hits = search_chemicals(&store, &filter).expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Sulfuric Acid");
}

#[test]
fn expiry_filter_matches_year_substring() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_temp_store(&dir);

    insert_chemical(&store, &sulfuric_acid()).expect("insert"); // 2026
    insert_chemical(&store, &acetic_acid()).expect("insert"); // 2025

    let filter = ChemicalFilter {
        expiry: "2025".into(),
        ..ChemicalFilter::default()
    };
    let hits = search_chemicals(&store, &filter).expect("search");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Acetic Acid");
}

#[test]
fn filter_values_with_quotes_cannot_inject() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_temp_store(&dir);

    insert_chemical(&store, &sulfuric_acid()).expect("insert");

    let filter = ChemicalFilter {
        name: "' OR '1'='1".into(),
        ..ChemicalFilter::default()
    };
    let hits = search_chemicals(&store, &filter).expect("search must not error");
    assert!(hits.is_empty(), "quoted value is data, not SQL");

    // Table is intact afterwards.
    assert_eq!(list_chemicals(&store).expect("list").len(), 1);
}

// -------------------------------------------------------------------------
// Expiry classification on rows
// -------------------------------------------------------------------------

#[test]
fn classification_is_advisory_and_injectable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = open_temp_store(&dir);

    let id = insert_chemical(&store, &acetic_acid()).expect("insert"); // 2025-03-15
    let record = get_chemical(&store, id).expect("get");

    let before = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
    let after = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
    assert!(!record.is_expired(before));
    assert!(record.is_expired(after));

    // Classification changed nothing in the store.
    assert_eq!(get_chemical(&store, id).expect("get again"), record);
}
