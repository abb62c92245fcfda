// mod.rs - Output writers module

use crate::core::finder::GeneResult;
use bio::io::fasta;
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

/// Flattened per-gene record shared by the TSV, CSV and JSON reports
#[derive(Debug, Clone, Serialize)]
pub struct ReportRecord {
    pub sample: String,
    pub alleles: usize,
    pub columns: usize,
    pub probe_size: Option<usize>,
    pub start: Option<usize>,
    pub stop: Option<usize>,
    pub min_identity: Option<f64>,
    pub mean_identity: Option<f64>,
    pub probes: usize,
    pub truncated: usize,
    pub status: String,
    pub sequence: String,
}

impl ReportRecord {
    pub fn from_gene(result: &GeneResult) -> Self {
        let selection = result.selection.as_ref();
        Self {
            sample: result.name.clone(),
            alleles: result.allele_count,
            columns: result.column_count,
            probe_size: selection.map(|s| s.size),
            start: selection.map(|s| s.start),
            stop: selection.map(|s| s.stop),
            min_identity: selection.map(|s| s.min_identity),
            mean_identity: selection.map(|s| s.mean_identity),
            probes: result.probes.as_ref().map(|p| p.len()).unwrap_or(0),
            truncated: result.probes.as_ref().map(|p| p.truncated).unwrap_or(0),
            status: result.status().to_string(),
            sequence: selection.map(|s| s.sequence.clone()).unwrap_or_default(),
        }
    }
}

/// Write the extracted probe alleles for one gene as FASTA, headers
/// `<sample>_<index>`. Returns None when the gene has no probes to write.
pub fn write_probe_fasta(output_dir: &Path, result: &GeneResult) -> Result<Option<PathBuf>, String> {
    let probe_set = match &result.probes {
        Some(probe_set) if !probe_set.is_empty() => probe_set,
        _ => return Ok(None),
    };

    create_dir_all(output_dir)
        .map_err(|e| format!("Failed to create output directory '{}': {}", output_dir.display(), e))?;
    let file_path = output_dir.join(format!("{}_probe_alleles.fasta", result.name));
    let file = File::create(&file_path)
        .map_err(|e| format!("Failed to create probe file '{}': {}", file_path.display(), e))?;

    let mut writer = fasta::Writer::new(BufWriter::new(file));
    for (index, probe) in probe_set.probes.iter().enumerate() {
        let header = format!("{}_{}", result.name, index);
        writer
            .write(&header, None, probe.as_bytes())
            .map_err(|e| format!("Failed to write probe record '{}': {}", header, e))?;
    }
    Ok(Some(file_path))
}

fn report_header(command_line: &str) -> Vec<String> {
    vec![
        format!("# Command: {}", command_line),
        format!(
            "# Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format!("# probefind v{}", env!("CARGO_PKG_VERSION")),
    ]
}

fn optional_field<T: ToString>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "NA".to_string(),
    }
}

/// Write the summary report in TSV format
pub fn write_report_tsv(
    file_path: &str,
    records: &[ReportRecord],
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create report file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    for line in report_header(command_line) {
        writeln!(writer, "{}", line).map_err(|e| format!("Write error: {}", e))?;
    }
    writeln!(
        writer,
        "sample\talleles\tcolumns\tprobe_size\tstart\tstop\tmin_identity\tmean_identity\tprobes\ttruncated\tstatus\tsequence"
    )
    .map_err(|e| format!("Write error: {}", e))?;

    for record in records {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            record.sample,
            record.alleles,
            record.columns,
            optional_field(&record.probe_size),
            optional_field(&record.start),
            optional_field(&record.stop),
            optional_field(&record.min_identity),
            optional_field(&record.mean_identity),
            record.probes,
            record.truncated,
            record.status,
            record.sequence,
        )
        .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Probe report written to: {}", file_path);
    Ok(())
}

/// Write the summary report in CSV format
pub fn write_report_csv(
    file_path: &str,
    records: &[ReportRecord],
    command_line: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create report file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    for line in report_header(command_line) {
        writeln!(writer, "{}", line).map_err(|e| format!("Write error: {}", e))?;
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer
            .serialize(record)
            .map_err(|e| format!("Failed to write CSV record: {}", e))?;
    }
    csv_writer
        .flush()
        .map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Probe report written to: {}", file_path);
    Ok(())
}

/// Write the summary report in the specified format
pub fn write_report(
    file_path: &str,
    format: &str,
    records: &[ReportRecord],
    command_line: &str,
) -> Result<(), String> {
    match format.to_lowercase().as_str() {
        "tsv" => write_report_tsv(file_path, records, command_line),
        "csv" => write_report_csv(file_path, records, command_line),
        _ => Err(format!("Unsupported report format: {}. Use: tsv, csv", format)),
    }
}

/// Write the per-gene records as pretty-printed JSON
pub fn write_json_report(file_path: &str, records: &[ReportRecord]) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| format!("Failed to serialize JSON report: {}", e))?;
    std::fs::write(file_path, json)
        .map_err(|e| format!("Failed to write JSON report '{}': {}", file_path, e))?;
    println!("✅ JSON report written to: {}", file_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extractor::ProbeSet;
    use crate::core::resolver::ProbeSelection;

    fn gene_result(name: &str) -> GeneResult {
        GeneResult {
            name: name.to_string(),
            allele_count: 3,
            column_count: 10,
            consensus: "GATTACAXTT".to_string(),
            window_results: Vec::new(),
            selection: Some(ProbeSelection {
                start: 1,
                stop: 5,
                size: 4,
                min_identity: 90.0,
                mean_identity: 95.5,
                sequence: "ATTA".to_string(),
            }),
            probes: Some(ProbeSet {
                probes: vec!["ATTA".to_string(), "ATTG".to_string()],
                expected_length: 4,
                truncated: 0,
            }),
            error: None,
        }
    }

    #[test]
    fn test_report_record_from_gene() {
        let record = ReportRecord::from_gene(&gene_result("stx1"));
        assert_eq!(record.sample, "stx1");
        assert_eq!(record.probe_size, Some(4));
        assert_eq!(record.probes, 2);
        assert_eq!(record.status, "ok");
        assert_eq!(record.sequence, "ATTA");
    }

    #[test]
    fn test_report_record_failed_gene() {
        let result = GeneResult::failed("stx2".to_string(), 1, "bad rows".to_string());
        let record = ReportRecord::from_gene(&result);
        assert_eq!(record.status, "alignment_error");
        assert_eq!(record.probe_size, None);
        assert_eq!(record.probes, 0);
        assert_eq!(optional_field(&record.probe_size), "NA");
    }
}
