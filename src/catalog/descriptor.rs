//! Index-field descriptors

/// One user-defined index field of an archive's document type
///
/// Immutable once read; descriptor order determines the order of the
/// renamed columns in the synthesized SELECT list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexFieldDescriptor {
    /// Physical column holding the value (e.g. `WAARDE_1`)
    pub source_column: String,
    /// Human-readable alias, spaces replaced by underscores so it stays a
    /// valid identifier
    pub display_alias: String,
    /// Secondary table the column originates from
    pub source_table: String,
}

impl IndexFieldDescriptor {
    pub fn new(
        source_column: impl Into<String>,
        display_alias: impl Into<String>,
        source_table: impl Into<String>,
    ) -> Self {
        Self {
            source_column: source_column.into(),
            display_alias: display_alias.into().replace(' ', "_"),
            source_table: source_table.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_spaces_become_underscores() {
        let descriptor = IndexFieldDescriptor::new("WAARDE_1", "Interne referentie", "DOCUMENT_12");
        assert_eq!(descriptor.display_alias, "Interne_referentie");
    }

    #[test]
    fn test_clean_alias_unchanged() {
        let descriptor = IndexFieldDescriptor::new("WAARDE_2", "Boekstuknummer", "DOCUMENT_7");
        assert_eq!(descriptor.display_alias, "Boekstuknummer");
    }
}
