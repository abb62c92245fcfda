// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// probefind - Conserved probe finder for divergent allele sets
pub struct Args {
    /// path to directory of raw allele FASTA files (one file per gene)
    #[argh(option)]
    pub alleles: Option<String>,

    /// path to directory of aligned allele FASTA files (same file stems as --alleles)
    #[argh(option)]
    pub aligned: Option<String>,

    /// output directory for probe allele FASTA files
    #[argh(option)]
    pub output: Option<String>,

    /// summary report file path
    #[argh(option)]
    pub report: Option<String>,

    /// report format: tsv, csv (default: tsv)
    #[argh(option, default = "String::from(\"tsv\")")]
    pub format: String,

    /// JSON report file path
    #[argh(option)]
    pub json_report: Option<String>,

    /// minimum size of probe to create (default: 20)
    #[argh(option, default = "20")]
    pub min: usize,

    /// maximum size of probe to create (default: 50)
    #[argh(option, default = "50")]
    pub max: usize,

    /// cutoff percent identity a window's worst column must exceed (default: 70)
    #[argh(option, default = "70.0")]
    pub cutoff: f64,

    /// consensus majority threshold for the reported sequence (default: 0.7)
    #[argh(option, default = "0.7")]
    pub consensus_threshold: f64,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// include only samples matching regex pattern
    #[argh(option)]
    pub include_samples: Option<String>,

    /// exclude samples matching regex pattern
    #[argh(option)]
    pub exclude_samples: Option<String>,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
