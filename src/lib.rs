//! Converts a haploid multi-sample VCF into a per-individual FASTA alignment.

pub mod alignment;
pub mod error;
pub mod genotype;
pub mod output;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

pub use alignment::Alignment;
pub use error::{Result, Vcf2MsaError};

#[derive(Debug)]
pub struct Summary {
    pub ntax: usize,
    pub records: usize,
    pub header_path: PathBuf,
    pub fasta_path: PathBuf,
}

/// Decodes `input` and writes both artifacts into `out_dir`.
///
/// Prints `NTAX = <n>` once the `#CHROM` line is parsed. Output files are
/// only created after the whole input has been decoded.
pub fn convert(input: &Path, out_dir: &Path) -> Result<Summary> {
    let file = File::open(input).map_err(|e| Vcf2MsaError::reading(input, e.into()))?;
    info!("reading {}", input.display());

    let alignment = Alignment::from_reader_with(BufReader::new(file), |ntax| {
        println!("NTAX = {ntax}");
    })
    .map_err(|e| Vcf2MsaError::reading(input, e))?;
    info!(
        "decoded {} records for {} individuals",
        alignment.records(),
        alignment.ntax()
    );

    let input_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string_lossy().into_owned());

    let header_path = out_dir.join(output::HEADER_FILE_NAME);
    let fasta_path = out_dir.join(output::fasta_file_name(&input_name));

    write_artifact(&header_path, |writer| output::write_header(writer, &alignment))?;
    write_artifact(&fasta_path, |writer| output::write_fasta(writer, &alignment))?;

    Ok(Summary {
        ntax: alignment.ntax(),
        records: alignment.records(),
        header_path,
        fasta_path,
    })
}

fn write_artifact<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    File::create(path)
        .map(BufWriter::new)
        .and_then(|mut writer| {
            write(&mut writer)?;
            writer.flush()
        })
        .map_err(|e| Vcf2MsaError::writing(path, e))?;
    info!("wrote {}", path.display());

    Ok(())
}
