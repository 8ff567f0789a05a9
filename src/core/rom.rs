//! Verilog ROM emission: preload directives and synthesizable lookup tables.
//!
//! Both encoders are stateless text transforms over a flat stimulus file.
//! The per-line payload is the same (row index, target identifier, declared
//! width, verbatim bit literal); only the wrapping differs, so one transform
//! serves both under [`RomStyle`].

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::warn;

use crate::error::{Result, StimulusError};

/// Dispatch signal the lookup tables are keyed on.
pub const TIME_STEP_SIGNAL: &str = "time_step";

/// Which wrapper a formatted entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomStyle {
    /// Flat preload directive: `name[i] = W'b...;`
    Preload,
    /// Case branch inside the lookup dispatch: `i: name = W'b...;`
    CaseBranch,
}

/// Format one ROM entry.
///
/// The bit literal is copied verbatim; this is a format transform, not a
/// validator.
pub fn format_rom_entry(
    style: RomStyle,
    identifier: &str,
    index: usize,
    width: usize,
    bits: &str,
) -> String {
    match style {
        RomStyle::Preload => format!("{identifier}[{index}] = {width}'b{bits};"),
        RomStyle::CaseBranch => format!("        {index}: {identifier} = {width}'b{bits};"),
    }
}

/// The single commented diagnostic emitted in place of a missing source.
pub fn missing_source_comment(path: &Path) -> String {
    format!(
        "// ***** ERROR: source file '{}' not found. Check the path. *****",
        path.display()
    )
}

/// A rendered lookup block plus its branch count for reporting.
#[derive(Debug, Clone)]
pub struct LookupBlock {
    /// Complete `always @(*)` block, or the missing-source placeholder.
    pub text: String,
    /// Case branches emitted (0 for a placeholder or empty input).
    pub row_count: usize,
}

/// Write one preload directive per input line.
///
/// Returns the number of directives written. Empty input produces an empty
/// artifact; a missing input degrades to a single commented diagnostic line
/// and returns 0.
pub fn write_preload_file(
    input: &Path,
    output: &Path,
    identifier: &str,
    width: usize,
) -> Result<usize> {
    let lines = match read_flat_lines(input) {
        Ok(lines) => lines,
        Err(StimulusError::SourceNotFound(missing)) => {
            warn!(
                "preload encoder: source '{}' not found, writing placeholder",
                missing.display()
            );
            fs::write(output, format!("{}\n", missing_source_comment(&missing)))?;
            return Ok(0);
        }
        Err(e) => return Err(e),
    };

    let mut out = BufWriter::new(File::create(output)?);
    for (i, bits) in lines.iter().enumerate() {
        note_malformed_line(input, i, width, bits);
        writeln!(
            out,
            "{}",
            format_rom_entry(RomStyle::Preload, identifier, i, width, bits)
        )?;
    }
    out.flush()?;
    Ok(lines.len())
}

/// Render the complete lookup block for one flat file:
///
/// ```text
/// always @(*) begin
///     case (time_step)
///         0: spike_pattern = 4'b0110;
///         default: spike_pattern = 4'b0000;
///     endcase
/// end
/// ```
///
/// Branch labels run `0..row_count` in input order with no gaps, and the
/// default branch carries the all-zero literal of the declared width. A
/// missing input degrades to the single commented diagnostic line.
pub fn lookup_table_block(input: &Path, identifier: &str, width: usize) -> Result<LookupBlock> {
    let lines = match read_flat_lines(input) {
        Ok(lines) => lines,
        Err(StimulusError::SourceNotFound(missing)) => {
            warn!(
                "lookup encoder: source '{}' not found, emitting placeholder",
                missing.display()
            );
            return Ok(LookupBlock {
                text: missing_source_comment(&missing),
                row_count: 0,
            });
        }
        Err(e) => return Err(e),
    };

    let mut text = String::new();
    text.push_str("always @(*) begin\n");
    text.push_str(&format!("    case ({TIME_STEP_SIGNAL})\n"));
    for (i, bits) in lines.iter().enumerate() {
        note_malformed_line(input, i, width, bits);
        text.push_str(&format_rom_entry(
            RomStyle::CaseBranch,
            identifier,
            i,
            width,
            bits,
        ));
        text.push('\n');
    }
    text.push_str(&format!(
        "        default: {identifier} = {width}'b{};\n",
        "0".repeat(width)
    ));
    text.push_str("    endcase\n");
    text.push_str("end");

    Ok(LookupBlock {
        text,
        row_count: lines.len(),
    })
}

/// Read a flat stimulus file into trimmed rows.
///
/// Blank lines are not rows; dropping them here keeps the branch labels
/// gapless on both encoder paths.
fn read_flat_lines(path: &Path) -> Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_owned)
            .collect()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(StimulusError::SourceNotFound(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Flag a literal that does not look like the declared width. Diagnostic
/// only; the output shape never changes.
fn note_malformed_line(input: &Path, index: usize, width: usize, bits: &str) {
    if bits.len() != width || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        warn!(
            "{}:{}: expected a {}-bit 0/1 literal, got {:?}",
            input.display(),
            index + 1,
            width,
            bits
        );
    }
}
