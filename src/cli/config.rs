// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub alleles: Option<String>,
    pub aligned: Option<String>,
    pub output: Option<String>,
    pub report: Option<String>,
    pub format: Option<String>,
    pub json_report: Option<String>,

    // Probe search settings
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub cutoff: Option<f64>,
    pub consensus_threshold: Option<f64>,

    // Performance
    pub threads: Option<usize>,

    // Sample filtering
    pub include_samples: Option<String>,
    pub exclude_samples: Option<String>,

    // Flags
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# probefind.toml - Configuration file for probefind
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Directory of raw allele FASTA files (one file per gene)
alleles = "/path/to/alleles"

# Directory of aligned allele FASTA files (same file stems as the raw alleles)
aligned = "/path/to/alignedalleles"

# Output directory for probe allele FASTA files
output = "probes"

# Summary report file path
report = "probe_report.tsv"

# Report format: tsv, csv
format = "tsv"

# JSON report file path
# json_report = "probe_report.json"

# =============================================================================
# PROBE SEARCH SETTINGS
# =============================================================================

# Minimum size of probe to create
min = 20

# Maximum size of probe to create
max = 50

# Cutoff percent identity a window's worst column must exceed
cutoff = 70.0

# Consensus majority threshold for the reported sequence
consensus_threshold = 0.7

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
threads = 8

# =============================================================================
# SAMPLE FILTERING
# =============================================================================

# Include only samples matching regex pattern
# include_samples = "stx.*"

# Exclude samples matching regex pattern
# exclude_samples = "control.*"

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs without computation (dry run)
dry_run = false
"#
        .to_string()
    }
}
