//! JSON output for listed quotes, for scripting and piping.

use serde::Serialize;

use crate::store::QuoteRecord;

#[derive(Serialize)]
struct Row<'a> {
    id: usize,
    #[serde(flatten)]
    record: &'a QuoteRecord,
}

pub fn render(records: &[QuoteRecord]) -> serde_json::Result<String> {
    let rows: Vec<Row<'_>> = records
        .iter()
        .enumerate()
        .map(|(i, record)| Row { id: i + 1, record })
        .collect();
    serde_json::to_string_pretty(&rows)
}
