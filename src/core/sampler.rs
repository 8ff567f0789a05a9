//! Stimulus sampling and flat-file emission.
//!
//! One run produces two parallel bit-matrices over the same population: the
//! activation matrix (an independent fair coin flip per cell) and the
//! class-flag matrix (the static excitatory/inhibitory partition repeated on
//! every row). Both land as flat line records: one line per time step, one
//! `0`/`1` character per unit, unit index 0 first.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::config::VectorConfig;
use crate::error::{Result, StimulusError};
use crate::prng::Prng;

/// Samples activation rows and emits the flat stimulus files.
#[derive(Debug, Clone)]
pub struct Sampler {
    cfg: VectorConfig,
    seed: u64,
    rng: Prng,
}

impl Sampler {
    /// Build a sampler; an absent `cfg.seed` is resolved from the clock.
    pub fn new(cfg: VectorConfig) -> Self {
        let seed = cfg.seed.unwrap_or_else(Prng::seed_from_clock);
        Self {
            rng: Prng::new(seed),
            seed,
            cfg,
        }
    }

    /// The seed this run actually uses.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &VectorConfig {
        &self.cfg
    }

    /// Sample one time step's activation row, one coin flip per unit.
    pub fn sample_row(&mut self) -> Vec<bool> {
        (0..self.cfg.unit_count)
            .map(|_| self.rng.next_bit())
            .collect()
    }

    /// The static class-flag row: `false` = excitatory, `true` = inhibitory.
    ///
    /// Not sampled. The write loop rebuilds it once per step so both flat
    /// files carry the same row count.
    pub fn class_flag_row(&self) -> Vec<bool> {
        let boundary = self.cfg.inhibitory_start();
        (0..self.cfg.unit_count).map(|i| i >= boundary).collect()
    }

    /// Write both matrices as flat line records, one file each.
    ///
    /// Missing parent directories are created first. Returns the row count
    /// written to each file. Failures here abort the run; there is no
    /// partial-write recovery.
    pub fn write_stimulus_files(&mut self, spike_path: &Path, flag_path: &Path) -> Result<usize> {
        ensure_parent_dir(spike_path)?;
        ensure_parent_dir(flag_path)?;

        info!(
            "sampling {} steps x {} units (seed {})",
            self.cfg.step_count, self.cfg.unit_count, self.seed
        );

        let mut spike_out = BufWriter::new(File::create(spike_path)?);
        let mut flag_out = BufWriter::new(File::create(flag_path)?);

        for _ in 0..self.cfg.step_count {
            let spikes = self.sample_row();
            let flags = self.class_flag_row();
            writeln!(spike_out, "{}", render_bits(&spikes))?;
            writeln!(flag_out, "{}", render_bits(&flags))?;
        }

        spike_out.flush()?;
        flag_out.flush()?;
        Ok(self.cfg.step_count)
    }
}

/// Render a bit row as `0`/`1` characters, unit index 0 first.
pub fn render_bits(row: &[bool]) -> String {
    row.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|source| StimulusError::ResourceUnavailable {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    /// Fresh path under the system temp dir; not created, so tests exercise
    /// the on-demand directory creation.
    fn unique_dir(name: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "spikegen_sampler_{}_{}_{}",
            std::process::id(),
            id,
            name
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn cleanup(dir: &Path) {
        let _ = fs::remove_dir_all(dir);
    }

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn flat_files_have_the_configured_shape() {
        let dir = unique_dir("shape");
        let spike = dir.join("spike_input.txt");
        let flags = dir.join("inhibition_flags.txt");

        let cfg = VectorConfig::with_size(16, 32).with_seed(7);
        let mut sampler = Sampler::new(cfg);
        let rows = sampler.write_stimulus_files(&spike, &flags).unwrap();
        assert_eq!(rows, 32);

        for path in [&spike, &flags] {
            let lines = read_lines(path);
            assert_eq!(lines.len(), 32);
            for line in &lines {
                assert_eq!(line.len(), 16);
                assert!(line.bytes().all(|b| b == b'0' || b == b'1'));
            }
        }
        cleanup(&dir);
    }

    #[test]
    fn class_flags_split_at_the_partition_on_every_row() {
        let dir = unique_dir("partition");
        let spike = dir.join("s.txt");
        let flags = dir.join("f.txt");

        let cfg = VectorConfig::with_size(10, 8).with_excitatory(4).with_seed(1);
        let mut sampler = Sampler::new(cfg);
        sampler.write_stimulus_files(&spike, &flags).unwrap();

        let lines = read_lines(&flags);
        assert_eq!(lines.len(), 8);
        for line in lines {
            let (exc, inh) = line.split_at(4);
            assert!(exc.bytes().all(|b| b == b'0'), "row {line}");
            assert!(inh.bytes().all(|b| b == b'1'), "row {line}");
        }
        cleanup(&dir);
    }

    #[test]
    fn four_unit_scenario_flags_read_0011() {
        let cfg = VectorConfig::with_size(4, 1).with_seed(3);
        let sampler = Sampler::new(cfg);
        assert_eq!(render_bits(&sampler.class_flag_row()), "0011");
    }

    #[test]
    fn same_seed_reproduces_the_activation_file() {
        let dir = unique_dir("reseed");
        let cfg = VectorConfig::with_size(32, 16).with_seed(99);

        let mut a = Sampler::new(cfg.clone());
        a.write_stimulus_files(&dir.join("a_s.txt"), &dir.join("a_f.txt"))
            .unwrap();
        let mut b = Sampler::new(cfg);
        b.write_stimulus_files(&dir.join("b_s.txt"), &dir.join("b_f.txt"))
            .unwrap();

        assert_eq!(
            fs::read(dir.join("a_s.txt")).unwrap(),
            fs::read(dir.join("b_s.txt")).unwrap()
        );

        let mut c = Sampler::new(VectorConfig::with_size(32, 16).with_seed(100));
        c.write_stimulus_files(&dir.join("c_s.txt"), &dir.join("c_f.txt"))
            .unwrap();
        assert_ne!(
            fs::read(dir.join("a_s.txt")).unwrap(),
            fs::read(dir.join("c_s.txt")).unwrap()
        );
        cleanup(&dir);
    }

    #[test]
    fn zero_steps_writes_empty_files() {
        let dir = unique_dir("zero");
        let spike = dir.join("s.txt");
        let flags = dir.join("f.txt");

        let cfg = VectorConfig::with_size(8, 0).with_seed(1);
        let mut sampler = Sampler::new(cfg);
        let rows = sampler.write_stimulus_files(&spike, &flags).unwrap();

        assert_eq!(rows, 0);
        assert_eq!(fs::read_to_string(&spike).unwrap(), "");
        assert_eq!(fs::read_to_string(&flags).unwrap(), "");
        cleanup(&dir);
    }

    #[test]
    fn output_directories_are_created_on_demand() {
        let dir = unique_dir("mkdir");
        let nested = dir.join("nested").join("tb");

        let cfg = VectorConfig::with_size(4, 2).with_seed(11);
        let mut sampler = Sampler::new(cfg);
        sampler
            .write_stimulus_files(&nested.join("s.txt"), &nested.join("f.txt"))
            .unwrap();

        assert!(nested.join("s.txt").exists());
        assert!(nested.join("f.txt").exists());
        cleanup(&dir);
    }

    #[test]
    fn unseeded_sampler_still_reports_its_seed() {
        let sampler = Sampler::new(VectorConfig::with_size(4, 1));
        assert_ne!(sampler.seed(), 0);
    }

    #[test]
    fn render_bits_maps_true_to_one() {
        assert_eq!(render_bits(&[false, true, true, false]), "0110");
        assert_eq!(render_bits(&[]), "");
    }
}
