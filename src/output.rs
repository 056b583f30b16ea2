//! Writes the header list and the FASTA alignment.

use std::io::{self, Write};

use noodles::fasta;

use crate::alignment::Alignment;

pub const HEADER_FILE_NAME: &str = "nucleotides_header.txt";

const NAME_SUFFIX: &str = "-";

pub fn fasta_file_name(input_name: &str) -> String {
    format!("nucleotides_{input_name}.fasta")
}

/// Writes `IND1- IND2- ...` on one line.
///
/// Nothing is written when the input never had a `#CHROM` line.
pub fn write_header<W: Write>(writer: &mut W, alignment: &Alignment) -> io::Result<()> {
    if !alignment.has_header() {
        return Ok(());
    }

    let names: Vec<String> = alignment
        .samples()
        .map(|name| format!("{name}{NAME_SUFFIX}"))
        .collect();

    writeln!(writer, "{}", names.join(" "))
}

/// Writes one unwrapped FASTA record per individual, in header order.
pub fn write_fasta<W: Write>(writer: &mut W, alignment: &Alignment) -> io::Result<()> {
    // Every decoded record extends all sequences, so they are empty together.
    // noodles writes no sequence line for an empty sequence.
    if alignment.individuals().iter().all(|individual| individual.sequence().is_empty()) {
        for individual in alignment.individuals() {
            writeln!(writer, ">{}", individual.name())?;
            writeln!(writer)?;
        }
        return Ok(());
    }

    let mut writer = fasta::io::writer::Builder::default()
        .set_line_base_count(usize::MAX)
        .build_with_writer(writer);

    for individual in alignment.individuals() {
        let definition = fasta::record::Definition::new(individual.name(), None);
        let sequence = fasta::record::Sequence::from(individual.sequence().as_bytes().to_vec());
        writer.write_record(&fasta::Record::new(definition, sequence))?;
    }

    Ok(())
}
