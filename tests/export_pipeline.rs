//! Export Pipeline Tests
//!
//! Folder naming, sidecar shapes and the row-to-mapping conversion,
//! exercised together the way the orchestrator uses them.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tempfile::TempDir;

use xtendis_export::executor::{Cell, ResultSet, RowMap};
use xtendis_export::export::{audit_json, document_location, metadata_json, ExportSink};

// =============================================================================
// Helper Functions
// =============================================================================

fn document_row(archive_key_field: &str, key: Cell) -> RowMap {
    let indexed = NaiveDate::from_ymd_opt(2022, 11, 3)
        .unwrap()
        .and_hms_opt(9, 15, 0)
        .unwrap();

    ResultSet::new(
        vec![
            "DOCUMENTID".into(),
            archive_key_field.to_string(),
            "INDEXEERDATUM".into(),
            "BEDRAG".into(),
        ],
        vec![vec![
            Cell::Int(4711),
            key,
            Cell::DateTime(indexed),
            Cell::Decimal("1250.00".into()),
        ]],
    )
    .to_mappings()
    .remove(0)
}

// =============================================================================
// Mapping Tests
// =============================================================================

/// Fields zip positionally with each row, one mapping per row.
#[test]
fn test_to_mappings_round_trip() {
    let result = ResultSet::new(
        vec!["A".into(), "B".into()],
        vec![
            vec![Cell::Int(1), Cell::Text("x".into())],
            vec![Cell::Int(2), Cell::Text("y".into())],
        ],
    );

    let value = serde_json::to_value(result.to_mappings()).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"A": 1, "B": "x"}, {"A": 2, "B": "y"}])
    );
}

/// The key-field lookup goes through the mapping, not reflection: the
/// same accessor works for every archive's key column.
#[test]
fn test_key_field_lookup_through_mapping() {
    let generic = document_row("DOCUMENTID", Cell::Int(4711));
    let reference = document_row("Interne_referentie", Cell::Text("INV-042".into()));

    assert_eq!(generic.get("DOCUMENTID"), Some(&Cell::Int(4711)));
    assert_eq!(
        reference.get("Interne_referentie"),
        Some(&Cell::Text("INV-042".into()))
    );
}

// =============================================================================
// Layout Tests
// =============================================================================

/// Folder tree is archive / year / month / key, with the archive number
/// zero-padded to two digits.
#[test]
fn test_document_location_shape() {
    let row = document_row("Interne_referentie", Cell::Text("INV-042".into()));
    let location = document_location(12, "Financieel", &row).unwrap();

    assert_eq!(
        location.folder,
        Path::new("archief 12 - Financieel/2022/11/INV-042")
    );
    assert_eq!(location.file_stem, "INV-042");
}

#[test]
fn test_single_digit_archive_is_padded() {
    let row = document_row("Boekstuknummer", Cell::Text("BK-9".into()));
    let location = document_location(7, "Inkoop", &row).unwrap();

    assert!(location.folder.starts_with("archief 07 - Inkoop"));
}

// =============================================================================
// Sidecar and Sink Tests
// =============================================================================

/// A metadata sidecar written through the sink reads back as one
/// document object with its fields in query order plus a Notes array.
#[test]
fn test_metadata_sidecar_written_to_tree() {
    let temp = TempDir::new().unwrap();
    let sink = ExportSink::new(temp.path().to_path_buf());

    let row = document_row("Interne_referentie", Cell::Text("INV-042".into()));
    let notes = ResultSet::new(
        vec!["TEKST".into(), "GEBRUIKER".into()],
        vec![vec![
            Cell::Text("akkoord".into()),
            Cell::Text("Jan Jansen (jjansen)".into()),
        ]],
    )
    .to_mappings();

    let location = document_location(12, "Financieel", &row).unwrap();
    let json = metadata_json(&row, &notes).unwrap();
    let path = sink
        .write(&location.folder, "INV-042.json", &json)
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(value[0]["DOCUMENTID"], 4711);
    assert_eq!(value[0]["BEDRAG"], "1250.00");
    assert_eq!(value[0]["Notes"][0]["GEBRUIKER"], "Jan Jansen (jjansen)");

    // Decimal survives as a string, dates as formatted text.
    assert_eq!(value[0]["INDEXEERDATUM"], "2022-11-03 09:15:00");
}

/// Audit sidecars are the audit rows as a JSON array.
#[test]
fn test_audit_sidecar_written_to_tree() {
    let temp = TempDir::new().unwrap();
    let sink = ExportSink::new(temp.path().to_path_buf());

    let entries = ResultSet::new(
        vec!["Handeling".into(), "NOTE".into()],
        vec![
            vec![Cell::Text("Indexeren".into()), Cell::Text("".into())],
            vec![Cell::Text("Notitie".into()), Cell::Text("zie bijlage".into())],
        ],
    )
    .to_mappings();

    let json = audit_json(&entries).unwrap();
    let path = sink
        .write(Path::new("archief 12 - Financieel/2022/11/INV-042"), "INV-042-audit.json", &json)
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[1]["NOTE"], "zie bijlage");
}
