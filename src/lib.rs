//! # spikegen
//!
//! Deterministic stimulus vectors for a spiking-hardware testbench.
//!
//! One run samples Bernoulli spike/inhibition bit-matrices, writes them as
//! flat text files for simulation, and re-encodes them as Verilog ROM
//! artifacts in two shapes: preload directives for testbench `initial`
//! blocks, and a synthesizable `case` lookup table keyed on `time_step`.
//!
//! ## Quick Start
//!
//! ```
//! use spikegen::prelude::*;
//!
//! // Sample a small run with a pinned seed
//! let cfg = VectorConfig::with_size(8, 4).with_seed(42);
//! let mut sampler = Sampler::new(cfg);
//!
//! // One line per time step, one character per unit
//! let row = render_bits(&sampler.sample_row());
//!
//! // Wrap a literal for the synthesizable lookup table
//! let entry = format_rom_entry(RomStyle::CaseBranch, "spike_pattern", 0, 8, &row);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): JSON (de)serialization for [`config::VectorConfig`]
//!
//! ## Modules
//!
//! - [`sampler`]: Bit-matrix sampling and flat-file emission
//! - [`rom`]: Verilog preload and lookup-table encoders
//! - [`qor`]: Genus QOR report summarizer
//! - [`config`]: Run configuration
//! - [`prng`]: Seedable xorshift64* bit source
//! - [`error`]: Pipeline error type

#[path = "core/config.rs"]
pub mod config;

#[path = "core/error.rs"]
pub mod error;

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/qor.rs"]
pub mod qor;

#[path = "core/rom.rs"]
pub mod rom;

#[path = "core/sampler.rs"]
pub mod sampler;

/// Prelude module for convenient imports.
///
/// ```
/// use spikegen::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::VectorConfig;
    pub use crate::error::StimulusError;
    pub use crate::prng::Prng;
    pub use crate::qor::QorSummary;
    pub use crate::rom::{
        format_rom_entry, lookup_table_block, write_preload_file, LookupBlock, RomStyle,
        TIME_STEP_SIGNAL,
    };
    pub use crate::sampler::{render_bits, Sampler};
}
