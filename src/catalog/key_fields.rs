//! Per-archive document key fields
//!
//! Folder and file names are keyed on a per-archive column: most archives
//! use the generic `DOCUMENTID`, the administrative archives use a
//! domain-specific reference number. The mapping is fixed and read-only.

/// The archive whose documents carry an audit trail ("Financieel")
pub const AUDIT_TRAIL_ARCHIVE_ID: i32 = 12;

/// Column that uniquely identifies a document's logical key within the
/// given archive, or `None` for archives this export does not know.
pub fn key_field(archive_id: i32) -> Option<&'static str> {
    let field = match archive_id {
        1 | 2 | 3 | 4 | 5 | 8 | 9 | 10 | 11 => "DOCUMENTID",
        6 | 12 => "Interne_referentie",
        7 => "Boekstuknummer",
        _ => return None,
    };
    Some(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_archives_use_document_id() {
        for archive in [1, 2, 3, 4, 5, 8, 9, 10, 11] {
            assert_eq!(key_field(archive), Some("DOCUMENTID"));
        }
    }

    #[test]
    fn test_reference_number_archives() {
        assert_eq!(key_field(6), Some("Interne_referentie"));
        assert_eq!(key_field(12), Some("Interne_referentie"));
        assert_eq!(key_field(7), Some("Boekstuknummer"));
    }

    #[test]
    fn test_unknown_archive_has_no_key_field() {
        assert_eq!(key_field(0), None);
        assert_eq!(key_field(99), None);
    }
}
