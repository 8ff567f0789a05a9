//! Genus QOR report summarizer.
//!
//! Standalone scraper for the synthesis tool's quality-of-results log. It
//! shares no data model with the stimulus pipeline; it lives here because
//! the synthesis flow runs it right after the ROM generator. Fields the
//! report never mentions are shown as `N/A` rather than failing the scan.

use std::fs;
use std::io;
use std::path::Path;

/// How a field's value is captured from its matching line.
#[derive(Debug, Clone, Copy)]
enum Capture {
    /// Last whitespace-separated token.
    LastToken,
    /// Last two tokens joined with a space (value plus its net name).
    LastTwoTokens,
    /// Second-to-last token with a fixed unit appended.
    SecondLastWith(&'static str),
    /// Last token with a fixed unit appended.
    LastWith(&'static str),
}

impl Capture {
    /// `None` when the line is too short for this capture.
    fn apply(self, line: &str) -> Option<String> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let last = *tokens.last()?;
        match self {
            Capture::LastToken => Some(last.to_owned()),
            Capture::LastTwoTokens => {
                let prev = tokens.len().checked_sub(2).map(|i| tokens[i])?;
                Some(format!("{prev} {last}"))
            }
            Capture::SecondLastWith(unit) => {
                let prev = tokens.len().checked_sub(2).map(|i| tokens[i])?;
                Some(format!("{prev}{unit}"))
            }
            Capture::LastWith(unit) => Some(format!("{last}{unit}")),
        }
    }
}

/// One known report field: display label, substring match, optional veto.
#[derive(Debug)]
struct FieldSpec {
    label: &'static str,
    needle: &'static str,
    reject: Option<&'static str>,
    capture: Capture,
}

impl FieldSpec {
    fn matches(&self, line: &str) -> bool {
        line.contains(self.needle) && self.reject.map_or(true, |r| !line.contains(r))
    }
}

/// The fields a Genus QOR report is scanned for, in display order.
///
/// A line is claimed by the first spec it matches; a later line matching the
/// same spec overwrites the earlier capture. The vetoes keep "Cell Area"
/// away from total-area lines and "Runtime" away from elapsed-runtime lines.
#[rustfmt::skip]
const FIELDS: &[FieldSpec] = &[
    FieldSpec { label: "Cell Area",                    needle: "Cell Area",                    reject: Some("Total"),   capture: Capture::LastToken },
    FieldSpec { label: "Total Area",                   needle: "Total Area",                   reject: None,            capture: Capture::LastToken },
    FieldSpec { label: "Sequential Instance Count",    needle: "Sequential Instance Count",    reject: None,            capture: Capture::LastToken },
    FieldSpec { label: "Combinational Instance Count", needle: "Combinational Instance Count", reject: None,            capture: Capture::LastToken },
    FieldSpec { label: "Hierarchical Instance Count",  needle: "Hierarchical Instance Count",  reject: None,            capture: Capture::LastToken },
    FieldSpec { label: "Max Fanout",                   needle: "Max Fanout",                   reject: None,            capture: Capture::LastTwoTokens },
    FieldSpec { label: "Min Fanout",                   needle: "Min Fanout",                   reject: None,            capture: Capture::LastTwoTokens },
    FieldSpec { label: "Average Fanout",               needle: "Average Fanout",               reject: None,            capture: Capture::LastToken },
    FieldSpec { label: "Runtime",                      needle: "Runtime",                      reject: Some("Elapsed"), capture: Capture::SecondLastWith(" seconds") },
    FieldSpec { label: "Elapsed Runtime",              needle: "Elapsed Runtime",              reject: None,            capture: Capture::SecondLastWith(" seconds") },
    FieldSpec { label: "Memory Usage",                 needle: "Genus peak memory usage",      reject: None,            capture: Capture::LastWith(" MB") },
];

/// Summary of one report: captured values in field display order.
#[derive(Debug, Clone)]
pub struct QorSummary {
    values: Vec<Option<String>>,
}

impl QorSummary {
    /// Scan report text for the known fields.
    pub fn from_text(text: &str) -> Self {
        let mut values = vec![None; FIELDS.len()];
        for line in text.lines() {
            if let Some(idx) = FIELDS.iter().position(|spec| spec.matches(line)) {
                if let Some(value) = FIELDS[idx].capture.apply(line) {
                    values[idx] = Some(value);
                }
            }
        }
        Self { values }
    }

    /// Read and scan a report file.
    pub fn read(path: &Path) -> io::Result<Self> {
        Ok(Self::from_text(&fs::read_to_string(path)?))
    }

    /// Captured value for a display label, if any.
    pub fn get(&self, label: &str) -> Option<&str> {
        FIELDS
            .iter()
            .position(|spec| spec.label == label)
            .and_then(|idx| self.values[idx].as_deref())
    }

    /// How many known fields the report never yielded.
    pub fn missing(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    /// Render the aligned summary table; absent fields show as `N/A`.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        out.push_str("Genus QOR Report Summary\n");
        out.push_str(&"-".repeat(40));
        out.push('\n');
        for (spec, value) in FIELDS.iter().zip(&self.values) {
            let shown = value.as_deref().unwrap_or("N/A");
            out.push_str(&format!("{:<30}: {}\n", spec.label, shown));
        }
        out
    }
}
