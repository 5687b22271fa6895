pub mod json;
pub mod table;

use crate::error::{Error, Result};
use crate::render::RenderOutcome;
use crate::store::QuoteRecord;

pub fn print_list(records: &[QuoteRecord], json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", json::render(records).map_err(Error::Encode)?);
    } else {
        print!("{}", table::render_list(records));
    }
    Ok(())
}

/// One-line note explaining a fallback render, `None` for the template path.
pub fn outcome_note(outcome: &RenderOutcome) -> Option<String> {
    match outcome {
        RenderOutcome::Template => None,
        RenderOutcome::Plain { reason } => {
            Some(format!("nota: layout semplice usato ({reason})"))
        }
        RenderOutcome::Minimal { reason } => {
            Some(format!("nota: scritto un PDF vuoto ({reason})"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_outcome_has_no_note() {
        assert_eq!(outcome_note(&RenderOutcome::Template), None);
    }

    #[test]
    fn fallback_notes_include_reason() {
        let note = outcome_note(&RenderOutcome::Plain {
            reason: "brand 'x': not found".into(),
        })
        .unwrap();
        assert!(note.contains("brand 'x'"));
    }
}
