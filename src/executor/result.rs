//! Result set and row-to-mapping conversion

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::value::Cell;

/// The uniform shape every executed query produces: ordered field names
/// plus rows of typed values. Every row has exactly `fields.len()` cells.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    /// Column names, in SELECT order
    pub fields: Vec<String>,
    /// Row values, positionally aligned with `fields`
    pub rows: Vec<Vec<Cell>>,
}

impl ResultSet {
    /// Create a result set; every row must match the field count
    pub fn new(fields: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(
            rows.iter().all(|row| row.len() == fields.len()),
            "row width must equal field count"
        );
        Self { fields, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Zip fields with each row positionally, producing one ordered
    /// field-to-value mapping per row. Used identically for metadata,
    /// note, audit and archive rows.
    pub fn to_mappings(&self) -> Vec<RowMap> {
        self.rows
            .iter()
            .map(|row| {
                RowMap(
                    self.fields
                        .iter()
                        .cloned()
                        .zip(row.iter().cloned())
                        .collect(),
                )
            })
            .collect()
    }
}

/// One row viewed as an ordered field-name-to-value mapping
///
/// Field order follows the SELECT list, and is preserved when the map is
/// serialized, so sidecar files list columns in query order.
#[derive(Debug, Clone)]
pub struct RowMap(Vec<(String, Cell)>);

impl RowMap {
    /// Look up a value by field name
    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.0
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Iterate over (field, value) pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.0.iter().map(|(field, value)| (field.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for RowMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, value) in &self.0 {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ResultSet {
        ResultSet::new(
            vec!["A".into(), "B".into()],
            vec![
                vec![Cell::Int(1), Cell::Text("x".into())],
                vec![Cell::Int(2), Cell::Text("y".into())],
            ],
        )
    }

    #[test]
    fn test_mapping_round_trip() {
        let mappings = sample().to_mappings();
        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings[0].get("A"), Some(&Cell::Int(1)));
        assert_eq!(mappings[0].get("B"), Some(&Cell::Text("x".into())));
        assert_eq!(mappings[1].get("A"), Some(&Cell::Int(2)));
        assert_eq!(mappings[1].get("B"), Some(&Cell::Text("y".into())));
    }

    #[test]
    fn test_mapping_serializes_in_field_order() {
        let mappings = sample().to_mappings();
        let text = serde_json::to_string(&mappings[0]).unwrap();
        assert_eq!(text, r#"{"A":1,"B":"x"}"#);
    }

    #[test]
    fn test_mapping_sequence_matches_rows() {
        let value = serde_json::to_value(sample().to_mappings()).unwrap();
        assert_eq!(value, json!([{"A": 1, "B": "x"}, {"A": 2, "B": "y"}]));
    }

    #[test]
    fn test_unknown_field_is_none() {
        let mappings = sample().to_mappings();
        assert!(mappings[0].get("MISSING").is_none());
    }

    #[test]
    fn test_empty_result_set() {
        let rs = ResultSet::default();
        assert!(rs.is_empty());
        assert!(rs.to_mappings().is_empty());
    }
}
