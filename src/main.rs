// main.rs - CLI entry point

use probefind::cli::Config;
use probefind::data::loaders::{find_alignment_file, load_alignment, load_samples};
use probefind::output::{write_json_report, write_probe_fasta, write_report, ReportRecord};
use probefind::prelude::*;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    // Validate required parameters
    let alleles_dir = args.alleles.clone().ok_or("--alleles is required")?;
    let aligned_dir = args.aligned.clone().ok_or("--aligned is required")?;
    let output_dir = if args.dry_run {
        None
    } else {
        Some(args.output.clone().ok_or("--output is required")?)
    };

    println!("🚀 probefind v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "🔍 Probe sizes {}..={}, identity cutoff >{}%",
        args.min, args.max, args.cutoff
    );

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    // Validate all arguments
    let validation = validate_args(&args)?;

    let total_start = Instant::now();

    // Load the raw allele sets, one sample per FASTA file
    let samples = load_samples(
        Path::new(&alleles_dir),
        validation.sample_include_regex.as_ref(),
        validation.sample_exclude_regex.as_ref(),
    )?;
    println!("📊 Loaded {} samples from {}", samples.len(), alleles_dir);

    // Pair each sample with its alignment. A missing or unreadable alignment
    // fails only that gene; the rest of the run continues.
    let mut genes = Vec::new();
    let mut failures: Vec<GeneResult> = Vec::new();
    for sample in samples {
        let aligned_path = match find_alignment_file(Path::new(&aligned_dir), &sample.name) {
            Some(path) => path,
            None => {
                eprintln!("⚠️  No aligned FASTA found for sample '{}'", sample.name);
                let allele_count = sample.alleles.len();
                failures.push(GeneResult::failed(
                    sample.name,
                    allele_count,
                    format!("No aligned FASTA file in {}", aligned_dir),
                ));
                continue;
            }
        };
        match load_alignment(&aligned_path) {
            Ok(alignment) => genes.push((sample, alignment)),
            Err(e) => {
                eprintln!("⚠️  Skipping sample '{}': {}", sample.name, e);
                let allele_count = sample.alleles.len();
                failures.push(GeneResult::failed(sample.name, allele_count, e));
            }
        }
    }

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        println!(
            "📊 {} genes ready, {} unusable",
            genes.len(),
            failures.len()
        );
        return Ok(());
    }

    // Run the probe search across all genes
    println!("🧬 Searching {} genes for conserved probes...", genes.len());
    let mut results = find_probes(&genes, &validation.params);
    results.extend(failures);
    results.sort_by(|a, b| a.name.cmp(&b.name));

    // Write the probe FASTA files
    let output_dir = output_dir.unwrap_or_default();
    let mut written = 0;
    for result in &results {
        if write_probe_fasta(Path::new(&output_dir), result)?.is_some() {
            written += 1;
        }
    }
    println!("✅ Wrote {} probe FASTA files to: {}", written, output_dir);

    // Write the reports
    let records: Vec<ReportRecord> = results.iter().map(ReportRecord::from_gene).collect();
    if let Some(report_path) = &args.report {
        write_report(report_path, &args.format, &records, &command_line)?;
    }
    if let Some(json_path) = &args.json_report {
        write_json_report(json_path, &records)?;
    }

    // Summarize outcomes
    let ok = results.iter().filter(|r| r.status() == "ok").count();
    let no_probe = results
        .iter()
        .filter(|r| r.status() == "no_probe_found")
        .count();
    let errors = results
        .iter()
        .filter(|r| r.status() == "alignment_error")
        .count();
    let truncated: usize = results
        .iter()
        .filter_map(|r| r.probes.as_ref())
        .map(|p| p.truncated)
        .sum();

    println!("📋 Summary:");
    println!("   ✅ Probes found: {}", ok);
    println!("   ⚪ No probe found: {}", no_probe);
    println!("   ❌ Alignment errors: {}", errors);
    if truncated > 0 {
        println!("   ✂️  Truncated extractions: {}", truncated);
    }
    println!(
        "🏁 Probe finding complete in {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
