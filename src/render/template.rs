//! Quote layout templates.
//!
//! A template renders to plain lines. `# ` marks a heading, an empty line
//! adds vertical space, anything else is body text.

use minijinja::{context, Environment, UndefinedBehavior};

use super::brand::BrandProfile;
use super::QuoteDetails;
use crate::error::Result;

pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/preventivo.txt.j2");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Heading,
    Body,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    pub fn heading(text: impl Into<String>) -> Self {
        Line {
            text: text.into(),
            style: LineStyle::Heading,
        }
    }

    pub fn body(text: impl Into<String>) -> Self {
        Line {
            text: text.into(),
            style: LineStyle::Body,
        }
    }

    fn blank() -> Self {
        Line {
            text: String::new(),
            style: LineStyle::Blank,
        }
    }
}

pub fn render_template(source: &str, details: &QuoteDetails, brand: &BrandProfile) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    let rendered = env.render_str(
        source,
        context! {
            cliente => &details.cliente,
            data => &details.data,
            totale => &details.totale,
            brand => brand,
        },
    )?;
    Ok(rendered)
}

pub fn layout_lines(rendered: &str) -> Vec<Line> {
    let mut lines: Vec<Line> = rendered
        .lines()
        .map(|raw| {
            let text = raw.trim_end();
            if text.trim().is_empty() {
                Line::blank()
            } else if let Some(heading) = text.strip_prefix("# ") {
                Line::heading(heading.trim())
            } else {
                Line::body(text)
            }
        })
        .collect();

    while lines.last().is_some_and(|l| l.style == LineStyle::Blank) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand() -> BrandProfile {
        serde_json::from_str(r#"{"logo": "/abs/logo.png", "nome": "Cyberworks"}"#).unwrap()
    }

    fn details() -> QuoteDetails {
        QuoteDetails {
            cliente: "ACME".into(),
            data: "2024-01-15".into(),
            totale: "123,45".into(),
        }
    }

    #[test]
    fn default_template_carries_extractable_lines() {
        let text = render_template(DEFAULT_TEMPLATE, &details(), &brand()).unwrap();
        let lines = layout_lines(&text);

        assert!(lines.contains(&Line::heading("Cyberworks")));
        assert!(lines.contains(&Line::heading("Preventivo per ACME")));
        assert!(lines.contains(&Line::body("Data: 2024-01-15")));
        assert!(lines.contains(&Line::body("Totale: € 123,45")));
    }

    #[test]
    fn optional_brand_lines_appear_when_set() {
        let mut b = brand();
        b.intestazione = Some("Via Roma 1, Milano".into());
        b.piede = Some("Validità 30 giorni".into());

        let lines = layout_lines(&render_template(DEFAULT_TEMPLATE, &details(), &b).unwrap());
        assert_eq!(lines.first(), Some(&Line::body("Via Roma 1, Milano")));
        assert_eq!(lines.last(), Some(&Line::body("Validità 30 giorni")));
    }

    #[test]
    fn undefined_variable_is_an_error() {
        let err = render_template("{{ sconto }}", &details(), &brand());
        assert!(err.is_err());
    }

    #[test]
    fn layout_classifies_lines() {
        let lines = layout_lines("# Titolo\n\ncorpo  \n\n\n");
        assert_eq!(
            lines,
            vec![Line::heading("Titolo"), Line::blank(), Line::body("corpo")]
        );
    }
}
