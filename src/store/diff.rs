//! Record comparison engine.
//!
//! Compares two archive records field by field:
//! - cliente, data, file, totale, in that order
//! - each field is marked same or different
//! - records are identified by their 1-based position in the date-sorted view

use super::QuoteRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Same,
    Different,
}

#[derive(Debug, Clone)]
pub struct FieldComparison {
    pub field: &'static str,
    pub left: String,
    pub right: String,
    pub status: FieldStatus,
}

pub struct Comparison {
    pub fields: Vec<FieldComparison>,
    pub left_position: i64,
    pub right_position: i64,
}

impl Comparison {
    pub fn differing(&self) -> impl Iterator<Item = &FieldComparison> {
        self.fields
            .iter()
            .filter(|f| f.status == FieldStatus::Different)
    }

    pub fn is_identical(&self) -> bool {
        self.differing().next().is_none()
    }
}

fn field(name: &'static str, left: &str, right: &str) -> FieldComparison {
    let status = if left == right {
        FieldStatus::Same
    } else {
        FieldStatus::Different
    };
    FieldComparison {
        field: name,
        left: left.to_string(),
        right: right.to_string(),
        status,
    }
}

/// Compare two records and produce one entry per compared field
pub fn compare_records(
    left: &QuoteRecord,
    right: &QuoteRecord,
    left_position: i64,
    right_position: i64,
) -> Comparison {
    // legacy records without a total show as "-"
    let left_total = left.totale.as_deref().unwrap_or("-");
    let right_total = right.totale.as_deref().unwrap_or("-");

    Comparison {
        fields: vec![
            field("cliente", &left.cliente, &right.cliente),
            field("data", &left.data, &right.data),
            field("file", &left.file, &right.file),
            field("totale", left_total, right_total),
        ],
        left_position,
        right_position,
    }
}
