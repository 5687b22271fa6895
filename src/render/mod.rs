//! Quote document rendering.
//!
//! Three paths, tried in order:
//! - template: brand profile + layout template, drawn with lopdf
//! - plain: three fixed lines (client, date, total), no branding
//! - minimal: a fixed empty one-page PDF
//!
//! Rendering itself never fails. The returned [`RenderOutcome`] says which
//! path produced the bytes and why the earlier ones were skipped.

pub mod brand;
pub mod pdf;
pub mod template;

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;


use crate::error::{Error, Result};
use pdf::PageStyle;
use template::Line;

/// Values substituted into a quote document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDetails {
    pub cliente: String,
    pub data: String,
    pub totale: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Template,
    Plain { reason: String },
    Minimal { reason: String },
}

impl RenderOutcome {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, RenderOutcome::Template)
    }
}

pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub outcome: RenderOutcome,
}

pub struct Renderer {
    branding_dir: PathBuf,
    template: Option<PathBuf>,
}

impl Renderer {
    /// `template` overrides the built-in layout when set.
    pub fn new(branding_dir: impl Into<PathBuf>, template: Option<PathBuf>) -> Self {
        Renderer {
            branding_dir: branding_dir.into(),
            template,
        }
    }

    pub fn render(&self, details: &QuoteDetails, brand: &str) -> RenderedPdf {
        resolve_fallbacks(self.render_template(details, brand), || {
            pdf::draw_lines(&plain_lines(details), &PageStyle::default())
        })
    }

    fn render_template(&self, details: &QuoteDetails, brand_name: &str) -> Result<Vec<u8>> {
        let brand = brand::load_brand(&self.branding_dir, brand_name)?;
        let source: Cow<'_, str> = match &self.template {
            Some(path) => Cow::Owned(fs::read_to_string(path).map_err(|e| Error::io(path, e))?),
            None => Cow::Borrowed(template::DEFAULT_TEMPLATE),
        };

        let rendered = template::render_template(&source, details, &brand)?;
        let lines = template::layout_lines(&rendered);
        if lines.is_empty() {
            return Err(Error::Render("template rendered no lines".to_string()));
        }
        pdf::draw_lines(&lines, &PageStyle::from_brand(&brand))
    }
}

fn plain_lines(details: &QuoteDetails) -> Vec<Line> {
    vec![
        Line::heading(format!("Preventivo per {}", details.cliente)),
        Line::body(format!("Data: {}", details.data)),
        Line::body(format!("Totale: € {}", details.totale)),
    ]
}

fn resolve_fallbacks<F>(primary: Result<Vec<u8>>, plain: F) -> RenderedPdf
where
    F: FnOnce() -> Result<Vec<u8>>,
{
    let primary_err = match primary {
        Ok(bytes) => {
            log::debug!("rendered quote from template ({} bytes)", bytes.len());
            return RenderedPdf {
                bytes,
                outcome: RenderOutcome::Template,
            };
        }
        Err(e) => e,
    };
    log::warn!("template rendering failed, using plain layout: {primary_err}");

    match plain() {
        Ok(bytes) => RenderedPdf {
            bytes,
            outcome: RenderOutcome::Plain {
                reason: primary_err.to_string(),
            },
        },
        Err(e) => {
            log::warn!("plain rendering failed, writing empty PDF: {e}");
            RenderedPdf {
                bytes: pdf::MINIMAL_PDF.to_vec(),
                outcome: RenderOutcome::Minimal {
                    reason: format!("{primary_err}; {e}"),
                },
            }
        }
    }
}
