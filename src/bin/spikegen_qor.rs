//! Genus QOR report summarizer.
//!
//! Examples:
//!   spikegen-qor
//!   spikegen-qor reports/qor.rpt
//!
//! Scans the given report (default `reports/qor.rpt`) for the known
//! area/instance/fanout/runtime fields and prints an aligned summary table.
//! Fields the report never mentions show up as `N/A`.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process;

use tracing::warn;

use spikegen::qor::QorSummary;

const DEFAULT_REPORT: &str = "reports/qor.rpt";

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("usage: spikegen-qor [REPORT_FILE]");
        println!("  summarize a Genus QOR report (default: {DEFAULT_REPORT})");
        return;
    }
    if args.len() > 1 {
        eprintln!("usage: spikegen-qor [REPORT_FILE]");
        process::exit(2);
    }

    let path = args
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT));

    match QorSummary::read(&path) {
        Ok(summary) => {
            print!("{}", summary.render_table());
            if summary.missing() > 0 {
                warn!("{} of the known fields missing from {:?}", summary.missing(), path);
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            // Missing report is routine before the first synthesis run.
            warn!("cannot open report {:?}: {e}", path);
        }
        Err(e) => {
            eprintln!("Failed to read {:?}: {e}", path);
            process::exit(1);
        }
    }
}
