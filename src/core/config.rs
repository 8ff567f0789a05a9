//! Run configuration for the stimulus pipeline.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for one stimulus generation run.
///
/// The defaults reproduce the shipped 64-neuron testbench: 1024 time steps
/// over 64 units, with units `0..32` excitatory and `32..64` inhibitory.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VectorConfig {
    /// Units per time step (columns of each bit-matrix).
    pub unit_count: usize,
    /// Sampled time steps (rows of each bit-matrix).
    pub step_count: usize,
    /// Units `0..excitatory_count` are excitatory, the rest inhibitory.
    pub excitatory_count: usize,
    /// Declared Verilog literal width. `None` means `unit_count`.
    pub width: Option<usize>,
    /// RNG seed. `None` draws one from the system clock per run.
    pub seed: Option<u64>,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            unit_count: 64,
            step_count: 1024,
            excitatory_count: 32,
            width: None,
            seed: None,
        }
    }
}

impl VectorConfig {
    /// Config with the given population and step count.
    ///
    /// The excitatory partition defaults to the lower half of the
    /// population, matching the shipped testbench split.
    pub fn with_size(unit_count: usize, step_count: usize) -> Self {
        Self {
            unit_count,
            step_count,
            excitatory_count: unit_count / 2,
            ..Default::default()
        }
    }

    /// Pin the RNG seed for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the excitatory/inhibitory split point.
    pub fn with_excitatory(mut self, excitatory_count: usize) -> Self {
        self.excitatory_count = excitatory_count;
        self
    }

    /// Effective Verilog literal width.
    pub fn declared_width(&self) -> usize {
        self.width.unwrap_or(self.unit_count)
    }

    /// First inhibitory unit index, clamped to the population.
    pub fn inhibitory_start(&self) -> usize {
        self.excitatory_count.min(self.unit_count)
    }

    /// Reject configurations the pipeline cannot make sense of.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.excitatory_count > self.unit_count {
            return Err("excitatory_count must be <= unit_count");
        }
        if self.width == Some(0) {
            return Err("width must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_testbench() {
        let cfg = VectorConfig::default();
        assert_eq!(cfg.unit_count, 64);
        assert_eq!(cfg.step_count, 1024);
        assert_eq!(cfg.excitatory_count, 32);
        assert_eq!(cfg.declared_width(), 64);
        assert!(cfg.seed.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn with_size_splits_the_population_in_half() {
        let cfg = VectorConfig::with_size(10, 5);
        assert_eq!(cfg.excitatory_count, 5);
        assert_eq!(cfg.inhibitory_start(), 5);
        assert_eq!(cfg.step_count, 5);
    }

    #[test]
    fn width_defaults_to_unit_count_until_overridden() {
        let mut cfg = VectorConfig::with_size(12, 3);
        assert_eq!(cfg.declared_width(), 12);
        cfg.width = Some(16);
        assert_eq!(cfg.declared_width(), 16);
    }

    #[test]
    fn validate_rejects_an_oversized_partition() {
        let cfg = VectorConfig::with_size(4, 1).with_excitatory(5);
        assert!(cfg.validate().is_err());
        // Library callers that skip validate() still get a clamped split.
        assert_eq!(cfg.inhibitory_start(), 4);
    }

    #[test]
    fn validate_rejects_a_zero_width() {
        let mut cfg = VectorConfig::default();
        cfg.width = Some(0);
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip_preserves_the_config() {
        let cfg = VectorConfig::with_size(8, 16).with_seed(99);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: VectorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg: VectorConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
        assert_eq!(cfg.seed, Some(5));
        assert_eq!(cfg.unit_count, 64);
        assert_eq!(cfg.step_count, 1024);
    }
}
