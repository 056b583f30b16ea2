// receive one position argument: a haploid multi-sample vcf (GT:AD:DP:GQ:PL)
// output: nucleotides_header.txt and nucleotides_<input>.fasta, one sequence per sample

use std::path::PathBuf;

use clap::Parser;
use log::debug;

/// Convert a haploid VCF into a per-individual FASTA alignment
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input VCF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Directory for nucleotides_header.txt and the FASTA output
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match vcf2msa::convert(&cli.input, &cli.out_dir) {
        Ok(summary) => debug!("{summary:?}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
