//! Terminal tables for archived quotes.
//!
//! - list: one row per record, numbered from 1 in date order
//! - compare: one row per field, `=` when equal, `≠` when different

use crate::store::diff::{Comparison, FieldStatus};
use crate::store::QuoteRecord;

pub const EMPTY_MESSAGE: &str = "Nessun preventivo trovato.";

pub fn render_list(records: &[QuoteRecord]) -> String {
    if records.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<4} {:<10} {:<24} {:>10}  {}\n",
        "ID", "Data", "Cliente", "Totale", "File"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for (idx, rec) in records.iter().enumerate() {
        output.push_str(&format!(
            "{:<4} {:<10} {:<24} {:>10}  {}\n",
            idx + 1,
            rec.data,
            truncate(&rec.cliente, 24),
            rec.totale.as_deref().unwrap_or("-"),
            rec.file
        ));
    }

    output
}

pub fn render_comparison(comparison: &Comparison) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Confronto ID {} vs ID {}\n",
        comparison.left_position, comparison.right_position
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for field in &comparison.fields {
        let marker = match field.status {
            FieldStatus::Same => "=",
            FieldStatus::Different => "≠",
        };
        output.push_str(&format!(
            "{marker} {:<8} {:<30} {}\n",
            field.field,
            truncate(&field.left, 30),
            field.right
        ));
    }

    let differing = comparison.differing().count();
    if differing == 0 {
        output.push_str("\nI preventivi coincidono.\n");
    } else {
        output.push_str(&format!("\n{differing} campo/i diversi.\n"));
    }

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::diff::compare_records;

    fn rec(cliente: &str, data: &str) -> QuoteRecord {
        QuoteRecord::new(cliente, data, "/q/a.pdf", "12,00")
    }

    #[test]
    fn empty_list_message() {
        assert_eq!(render_list(&[]), "Nessun preventivo trovato.\n");
    }

    #[test]
    fn rows_are_numbered_from_one() {
        let out = render_list(&[rec("Acme", "2024-01-01"), rec("Beta", "2024-01-02")]);
        let rows: Vec<&str> = out.lines().skip(2).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("1 "));
        assert!(rows[0].contains("Acme") && rows[0].contains("2024-01-01"));
        assert!(rows[1].starts_with("2 "));
    }

    #[test]
    fn legacy_record_shows_dash_total() {
        let mut legacy = rec("Old", "2020-01-01");
        legacy.totale = None;
        let out = render_list(&[legacy]);
        assert!(out.lines().nth(2).unwrap().contains(" - "));
    }

    #[test]
    fn comparison_marks_differences() {
        let cmp = compare_records(&rec("A", "2024-01-01"), &rec("B", "2024-01-01"), 1, 2);
        let out = render_comparison(&cmp);

        assert!(out.starts_with("Confronto ID 1 vs ID 2\n"));
        let cliente = out.lines().find(|l| l.contains("cliente")).unwrap();
        assert!(cliente.starts_with('≠'));
        let data = out.lines().find(|l| l.contains(" data ")).unwrap();
        assert!(data.starts_with('='));
        assert!(out.contains("1 campo/i diversi."));
    }

    #[test]
    fn long_names_truncated() {
        assert_eq!(truncate("abcdefghij", 6), "abc...");
        assert_eq!(truncate("abc", 6), "abc");
    }
}
