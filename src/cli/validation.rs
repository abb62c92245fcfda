// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::finder::SearchParams;
use regex::Regex;

pub struct ValidationResult {
    pub params: SearchParams,
    pub sample_include_regex: Option<Regex>,
    pub sample_exclude_regex: Option<Regex>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Probe size bounds
    if args.min == 0 {
        return Err("--min must be at least 1".to_string());
    }
    if args.min > args.max {
        return Err(format!(
            "--min ({}) cannot exceed --max ({})",
            args.min, args.max
        ));
    }

    // Identity cutoff is a percentage; 100 would make every window fail the
    // strict > comparison
    if !(0.0..100.0).contains(&args.cutoff) {
        return Err("--cutoff must be between 0 and 100 (exclusive)".to_string());
    }

    // Consensus threshold is a fraction
    if args.consensus_threshold <= 0.0 || args.consensus_threshold > 1.0 {
        return Err("--consensus-threshold must be in (0.0, 1.0]".to_string());
    }

    // Report format
    match args.format.to_lowercase().as_str() {
        "tsv" | "csv" => {}
        other => {
            return Err(format!(
                "Invalid report format '{}'. Use: tsv, csv",
                other
            ))
        }
    }

    // Compile sample filters
    let sample_include_regex = match &args.include_samples {
        Some(pattern) => Some(
            Regex::new(pattern)
                .map_err(|e| format!("Invalid --include-samples regex '{}': {}", pattern, e))?,
        ),
        None => None,
    };
    let sample_exclude_regex = match &args.exclude_samples {
        Some(pattern) => Some(
            Regex::new(pattern)
                .map_err(|e| format!("Invalid --exclude-samples regex '{}': {}", pattern, e))?,
        ),
        None => None,
    };

    Ok(ValidationResult {
        params: SearchParams {
            min_size: args.min,
            max_size: args.max,
            cutoff: args.cutoff,
            consensus_threshold: args.consensus_threshold,
        },
        sample_include_regex,
        sample_exclude_regex,
    })
}
