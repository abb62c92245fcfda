// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.alleles.is_none() {
            self.alleles = config.alleles;
        }
        if self.aligned.is_none() {
            self.aligned = config.aligned;
        }
        if self.output.is_none() {
            self.output = config.output;
        }
        if self.report.is_none() {
            self.report = config.report;
        }
        if self.format == "tsv" && config.format.is_some() {
            self.format = config.format.unwrap();
        }
        if self.json_report.is_none() {
            self.json_report = config.json_report;
        }

        // Probe search settings (only override defaults, not explicit CLI values)
        if self.min == 20 && config.min.is_some() {
            self.min = config.min.unwrap();
        }
        if self.max == 50 && config.max.is_some() {
            self.max = config.max.unwrap();
        }
        if self.cutoff == 70.0 && config.cutoff.is_some() {
            self.cutoff = config.cutoff.unwrap();
        }
        if self.consensus_threshold == 0.7 && config.consensus_threshold.is_some() {
            self.consensus_threshold = config.consensus_threshold.unwrap();
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Sample filtering
        if self.include_samples.is_none() {
            self.include_samples = config.include_samples;
        }
        if self.exclude_samples.is_none() {
            self.exclude_samples = config.exclude_samples;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
