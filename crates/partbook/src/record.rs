//! Core record types for partbook.
//!
//! This module defines the component record, its flat-file serialization,
//! and the in-memory field search.

use serde::{Deserialize, Serialize};

/// The delimiter line that terminates one serialized record.
pub const DELIMITER: &str = "-----";

/// One electronic-component entry.
///
/// All text fields are non-empty when a record is built through the shell or
/// the `add` subcommand. The digit rule on `status` is enforced at input time
/// only; records loaded from a file are taken as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Descriptive name, digits allowed (e.g. "Resistor 1k").
    pub name: String,
    /// Category, digits allowed (e.g. "Ceramic capacitor").
    pub kind: String,
    /// Principal magnitude (e.g. 1000.0 for 1k).
    pub nominal_value: f32,
    /// Tolerance as a percentage (e.g. 5.0 for 5%).
    pub tolerance: f32,
    /// Maximum working voltage in volts.
    pub working_voltage: f32,
    /// Condition, no digits allowed (e.g. "New", "Used").
    pub status: String,
}

impl Record {
    /// Serialize this record to its 7-line flat-file block.
    ///
    /// Six field lines followed by the delimiter line, each newline
    /// terminated. Floats are written with shortest round-trip formatting,
    /// so `1000.0` serializes as `1000` and `12.5` as `12.5`.
    #[must_use]
    pub fn to_block(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}\n{}\n{}\n{DELIMITER}\n",
            self.name,
            self.kind,
            self.nominal_value,
            self.tolerance,
            self.working_voltage,
            self.status,
        )
    }
}

impl std::fmt::Display for Record {
    /// The detail view printed for search matches.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Kind: {}", self.kind)?;
        writeln!(f, "Nominal value: {}", self.nominal_value)?;
        writeln!(f, "Tolerance: {}%", self.tolerance)?;
        writeln!(f, "Voltage: {}V", self.working_voltage)?;
        writeln!(f, "Status: {}", self.status)?;
        write!(f, "{DELIMITER}")
    }
}

/// A searchable record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Component name.
    Name,
    /// Component kind.
    Kind,
    /// Nominal value.
    NominalValue,
    /// Tolerance percentage.
    Tolerance,
    /// Working voltage.
    WorkingVoltage,
    /// Condition text.
    Status,
}

impl Field {
    /// Whether queries against this field are numeric (exact equality)
    /// rather than textual (substring containment).
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::NominalValue | Self::Tolerance | Self::WorkingVoltage
        )
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Kind => write!(f, "kind"),
            Self::NominalValue => write!(f, "nominal_value"),
            Self::Tolerance => write!(f, "tolerance"),
            Self::WorkingVoltage => write!(f, "working_voltage"),
            Self::Status => write!(f, "status"),
        }
    }
}

/// A query against a single record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldQuery {
    /// Case-sensitive substring match on the name.
    Name(String),
    /// Case-sensitive substring match on the kind.
    Kind(String),
    /// Exact match on the nominal value.
    NominalValue(f32),
    /// Exact match on the tolerance.
    Tolerance(f32),
    /// Exact match on the working voltage.
    WorkingVoltage(f32),
    /// Case-sensitive substring match on the status.
    Status(String),
}

impl FieldQuery {
    /// Build a query for `field` from raw query text.
    ///
    /// Text fields take the query verbatim. Numeric fields parse it as an
    /// `f32`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuery`](crate::Error::InvalidQuery) if a
    /// numeric field is queried with text that does not parse as a float.
    pub fn for_field(field: Field, raw: &str) -> crate::Result<Self> {
        let parse = |raw: &str| {
            raw.trim()
                .parse::<f32>()
                .map_err(|_| crate::Error::invalid_query(field, raw))
        };
        Ok(match field {
            Field::Name => Self::Name(raw.to_string()),
            Field::Kind => Self::Kind(raw.to_string()),
            Field::NominalValue => Self::NominalValue(parse(raw)?),
            Field::Tolerance => Self::Tolerance(parse(raw)?),
            Field::WorkingVoltage => Self::WorkingVoltage(parse(raw)?),
            Field::Status => Self::Status(raw.to_string()),
        })
    }

    /// Check whether `record` satisfies this query.
    ///
    /// Numeric comparisons are intentionally exact: a record stored with
    /// tolerance 5.0 is not found by a query for 5.0001. This mirrors the
    /// file format's write-then-reparse semantics and is a known
    /// float-precision hazard.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::Name(q) => record.name.contains(q.as_str()),
            Self::Kind(q) => record.kind.contains(q.as_str()),
            Self::NominalValue(q) => record.nominal_value == *q,
            Self::Tolerance(q) => record.tolerance == *q,
            Self::WorkingVoltage(q) => record.working_voltage == *q,
            Self::Status(q) => record.status.contains(q.as_str()),
        }
    }
}

/// Linear search over an in-memory record sequence.
///
/// Returns all matching records in their original order. An empty result is
/// a normal outcome ("not found"), never an error.
#[must_use]
pub fn search<'a>(records: &'a [Record], query: &FieldQuery) -> Vec<&'a Record> {
    records.iter().filter(|r| query.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resistor() -> Record {
        Record {
            name: "Resistor 1k".to_string(),
            kind: "Resistor".to_string(),
            nominal_value: 1000.0,
            tolerance: 5.0,
            working_voltage: 12.5,
            status: "New".to_string(),
        }
    }

    #[test]
    fn test_to_block_layout() {
        let block = resistor().to_block();
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(
            lines,
            vec!["Resistor 1k", "Resistor", "1000", "5", "12.5", "New", "-----"]
        );
        assert!(block.ends_with('\n'));
    }

    #[test]
    fn test_display_detail_view() {
        let text = resistor().to_string();
        assert!(text.contains("Name: Resistor 1k"));
        assert!(text.contains("Tolerance: 5%"));
        assert!(text.contains("Voltage: 12.5V"));
        assert!(text.ends_with("-----"));
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::Name.to_string(), "name");
        assert_eq!(Field::NominalValue.to_string(), "nominal_value");
        assert_eq!(Field::WorkingVoltage.to_string(), "working_voltage");
    }

    #[test]
    fn test_field_is_numeric() {
        assert!(Field::NominalValue.is_numeric());
        assert!(Field::Tolerance.is_numeric());
        assert!(Field::WorkingVoltage.is_numeric());
        assert!(!Field::Name.is_numeric());
        assert!(!Field::Kind.is_numeric());
        assert!(!Field::Status.is_numeric());
    }

    #[test]
    fn test_query_for_text_field_is_verbatim() {
        let query = FieldQuery::for_field(Field::Name, "  1k ").unwrap();
        assert_eq!(query, FieldQuery::Name("  1k ".to_string()));
    }

    #[test]
    fn test_query_for_numeric_field_parses() {
        let query = FieldQuery::for_field(Field::Tolerance, " 5.0 ").unwrap();
        assert_eq!(query, FieldQuery::Tolerance(5.0));
    }

    #[test]
    fn test_query_for_numeric_field_rejects_text() {
        let result = FieldQuery::for_field(Field::NominalValue, "lots");
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("nominal_value"));
        assert!(msg.contains("lots"));
    }

    #[test]
    fn test_substring_search_is_case_sensitive() {
        let records = vec![
            resistor(),
            Record {
                name: "resistor 2k".to_string(),
                ..resistor()
            },
        ];

        let matches = search(&records, &FieldQuery::Name("Res".to_string()));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Resistor 1k");

        let matches = search(&records, &FieldQuery::Name("k".to_string()));
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "Resistor 1k");
        assert_eq!(matches[1].name, "resistor 2k");
    }

    #[test]
    fn test_numeric_search_excludes_near_misses() {
        let records = vec![resistor()];
        assert_eq!(search(&records, &FieldQuery::Tolerance(5.0)).len(), 1);
        assert!(search(&records, &FieldQuery::Tolerance(5.0001)).is_empty());
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let records = vec![resistor()];
        let matches = search(&records, &FieldQuery::Status("Used".to_string()));
        assert!(matches.is_empty());
    }

    #[test]
    fn test_search_preserves_order() {
        let mut records = Vec::new();
        for i in 0..4 {
            records.push(Record {
                name: format!("Cap {i}"),
                ..resistor()
            });
        }
        let matches = search(&records, &FieldQuery::Name("Cap".to_string()));
        let names: Vec<&str> = matches.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cap 0", "Cap 1", "Cap 2", "Cap 3"]);
    }

    #[test]
    fn test_search_by_kind_and_status() {
        let records = vec![resistor()];
        assert_eq!(search(&records, &FieldQuery::Kind("Res".to_string())).len(), 1);
        assert_eq!(
            search(&records, &FieldQuery::Status("New".to_string())).len(),
            1
        );
        assert!(search(&records, &FieldQuery::Kind("res".to_string())).is_empty());
    }

    #[test]
    fn test_record_serialization() {
        let record = resistor();
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
