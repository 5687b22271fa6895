//! Quote workflows.
//!
//! - generate: render a PDF, write it, archive a record for it
//! - import: scrape an existing PDF, archive a record for it
//!
//! Both append to the archive whichever rendering path or extraction default
//! was taken.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::extract::{self, PdfTextSource};
use crate::render::{QuoteDetails, RenderOutcome, Renderer};
use crate::store::{QuoteRecord, Store};

pub struct GenerateRequest {
    pub cliente: String,
    pub dest: PathBuf,
    pub totale: String,
    pub brand: String,
}

pub struct GenerateResult {
    pub record: QuoteRecord,
    pub outcome: RenderOutcome,
}

/// Values that take precedence over what is scraped from the PDF.
#[derive(Debug, Default)]
pub struct ImportOverrides {
    pub cliente: Option<String>,
    pub data: Option<String>,
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn absolute_path_string(path: &Path) -> Result<String> {
    let resolved = fs::canonicalize(path).map_err(|e| Error::io(path, e))?;
    Ok(resolved.display().to_string())
}

pub fn generate(
    store: &Store,
    renderer: &Renderer,
    request: GenerateRequest,
    today: NaiveDate,
) -> Result<GenerateResult> {
    log::debug!("generating quote for {}", request.cliente);

    let details = QuoteDetails {
        cliente: request.cliente,
        data: today.format("%Y-%m-%d").to_string(),
        totale: request.totale,
    };

    let rendered = renderer.render(&details, &request.brand);
    fs::write(&request.dest, &rendered.bytes).map_err(|e| Error::io(&request.dest, e))?;
    log::debug!("wrote {} bytes to {}", rendered.bytes.len(), request.dest.display());

    let record = QuoteRecord::new(
        details.cliente,
        details.data,
        absolute_path_string(&request.dest)?,
        details.totale,
    );
    store.append(record.clone())?;

    Ok(GenerateResult {
        record,
        outcome: rendered.outcome,
    })
}

pub fn import(
    store: &Store,
    source: &dyn PdfTextSource,
    path: &Path,
    overrides: ImportOverrides,
    today: NaiveDate,
) -> Result<QuoteRecord> {
    let file = absolute_path_string(path)?;
    let text = source.extract_text(path)?;
    let meta = extract::parse_quote_text(&text, today);

    let record = QuoteRecord::new(
        overrides.cliente.unwrap_or(meta.cliente),
        overrides.data.unwrap_or(meta.data),
        file,
        meta.totale,
    );
    store.append(record.clone())?;

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct FixedText(&'static str);

    impl PdfTextSource for FixedText {
        fn extract_text(&self, _path: &Path) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    #[test]
    fn generate_archives_record_even_on_fallback() {
        let tmp = TempDir::new().unwrap();
        let store = Store::new(tmp.path().join("db.json"));
        let renderer = Renderer::new(tmp.path().join("no-branding"), None);
        let dest = tmp.path().join("q.pdf");

        let result = generate(
            &store,
            &renderer,
            GenerateRequest {
                cliente: "Acme".into(),
                dest: dest.clone(),
                totale: "99,00".into(),
                brand: "default".into(),
            },
            day(),
        )
        .unwrap();

        assert!(result.outcome.is_fallback());
        assert!(dest.exists());
        assert_eq!(result.record.data, "2024-05-20");
        assert!(Path::new(&result.record.file).is_absolute());
        assert_eq!(store.list(None).unwrap(), vec![result.record]);
    }

    #[test]
    fn generate_into_missing_directory_fails_without_archiving() {
        let tmp = TempDir::new().unwrap();
        let store = Store::new(tmp.path().join("db.json"));
        let renderer = Renderer::new(tmp.path(), None);

        let err = generate(
            &store,
            &renderer,
            GenerateRequest {
                cliente: "Acme".into(),
                dest: tmp.path().join("missing").join("q.pdf"),
                totale: "0,00".into(),
                brand: "default".into(),
            },
            day(),
        );

        assert!(matches!(err, Err(Error::Io { .. })));
        assert!(store.list(None).unwrap().is_empty());
    }

    #[test]
    fn import_uses_extracted_fields() {
        let tmp = TempDir::new().unwrap();
        let store = Store::new(tmp.path().join("db.json"));
        let pdf = tmp.path().join("in.pdf");
        fs::write(&pdf, b"%PDF-").unwrap();
        let source = FixedText("Preventivo per ACME S.p.A.\nData: 2024-01-15\nTotale: € 123,45");

        let record = import(&store, &source, &pdf, ImportOverrides::default(), day()).unwrap();

        assert_eq!(record.cliente, "ACME S.p.A.");
        assert_eq!(record.data, "2024-01-15");
        assert_eq!(record.totale.as_deref(), Some("123,45"));
        assert_eq!(store.list(None).unwrap()[0].cliente, "ACME S.p.A.");
    }

    #[test]
    fn import_overrides_win() {
        let tmp = TempDir::new().unwrap();
        let store = Store::new(tmp.path().join("db.json"));
        let pdf = tmp.path().join("in.pdf");
        fs::write(&pdf, b"%PDF-").unwrap();
        let overrides = ImportOverrides {
            cliente: Some("Beta".into()),
            data: None,
        };

        let record = import(&store, &FixedText("nulla"), &pdf, overrides, day()).unwrap();

        assert_eq!(record.cliente, "Beta");
        assert_eq!(record.data, "2024-05-20");
        assert_eq!(record.totale.as_deref(), Some("0,00"));
    }

    #[test]
    fn import_of_missing_file_fails() {
        let tmp = TempDir::new().unwrap();
        let store = Store::new(tmp.path().join("db.json"));

        let err = import(
            &store,
            &FixedText(""),
            &tmp.path().join("ghost.pdf"),
            ImportOverrides::default(),
            day(),
        );
        assert!(err.is_err());
        assert!(!store.path().exists());
    }
}
