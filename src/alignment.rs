//! Accumulates one decoded sequence per individual from a VCF body.

use std::io::BufRead;

use log::{debug, warn};

use crate::error::{Result, Vcf2MsaError};
use crate::genotype;

const HEADER_PREFIX: &str = "#CHROM";
const COMMENT_PREFIX: char = '#';

const CHROM_COLUMN: usize = 0;
const POS_COLUMN: usize = 1;
const REF_COLUMN: usize = 3;
const ALT_COLUMN: usize = 4;
// CHROM POS ID REF ALT QUAL FILTER INFO FORMAT
const FIXED_COLUMNS: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    name: String,
    sequence: String,
}

impl Individual {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            sequence: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }
}

/// What a single input line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Blank,
    Comment,
    Header { ntax: usize },
    Record,
}

/// Individuals in `#CHROM` column order, each owning its sequence.
#[derive(Debug, Default)]
pub struct Alignment {
    has_header: bool,
    individuals: Vec<Individual>,
    records: usize,
    line_number: usize,
}

impl Alignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with(reader, |_| {})
    }

    /// Reads every line of `reader`, calling `on_header` with the number of
    /// individuals once the `#CHROM` line has been parsed.
    pub fn from_reader_with<R, F>(reader: R, mut on_header: F) -> Result<Self>
    where
        R: BufRead,
        F: FnMut(usize),
    {
        let mut alignment = Self::new();

        for line in reader.lines() {
            if let Line::Header { ntax } = alignment.read_line(&line?)? {
                on_header(ntax);
            }
        }

        Ok(alignment)
    }

    pub fn read_line(&mut self, line: &str) -> Result<Line> {
        self.line_number += 1;
        let line = line.trim();

        if line.is_empty() {
            Ok(Line::Blank)
        } else if line.starts_with(HEADER_PREFIX) {
            Ok(self.read_header(line))
        } else if line.starts_with(COMMENT_PREFIX) {
            Ok(Line::Comment)
        } else {
            self.read_record(line)?;
            Ok(Line::Record)
        }
    }

    fn read_header(&mut self, line: &str) -> Line {
        if self.has_header {
            warn!(
                "ignoring repeated {} line at line {}",
                HEADER_PREFIX, self.line_number
            );
            return Line::Comment;
        }

        self.has_header = true;
        self.individuals = line
            .split_whitespace()
            .skip(FIXED_COLUMNS)
            .map(Individual::new)
            .collect();

        Line::Header { ntax: self.ntax() }
    }

    fn read_record(&mut self, line: &str) -> Result<()> {
        let fields: Vec<&str> = line.split_whitespace().collect();

        if fields.len() <= ALT_COLUMN {
            return Err(Vcf2MsaError::malformed_record(
                self.line_number,
                format!(
                    "expected at least {} columns, found {}",
                    ALT_COLUMN + 1,
                    fields.len()
                ),
            ));
        }

        let (reference, alternate) = (fields[REF_COLUMN], fields[ALT_COLUMN]);
        let genotypes = fields.get(FIXED_COLUMNS..).unwrap_or_default();

        if genotypes.len() < self.individuals.len() {
            return Err(Vcf2MsaError::malformed_record(
                self.line_number,
                format!(
                    "{} genotype columns for {} individuals",
                    genotypes.len(),
                    self.individuals.len()
                ),
            ));
        } else if genotypes.len() > self.individuals.len() {
            debug!(
                "{}:{} has {} genotype columns for {} individuals",
                fields[CHROM_COLUMN],
                fields[POS_COLUMN],
                genotypes.len(),
                self.individuals.len()
            );
        }

        if !self.has_header && self.records == 0 {
            warn!(
                "record at line {} precedes the {} line",
                self.line_number, HEADER_PREFIX
            );
        }

        // decode the whole row before touching any sequence
        let bases = self
            .individuals
            .iter()
            .zip(genotypes)
            .map(|(individual, field)| {
                genotype::decode(reference, alternate, field).ok_or_else(|| {
                    Vcf2MsaError::MalformedGenotype {
                        line: self.line_number,
                        sample: individual.name.clone(),
                        field: field.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for (individual, base) in self.individuals.iter_mut().zip(bases) {
            individual.sequence.push_str(base.as_str());
        }

        self.records += 1;

        Ok(())
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Number of individuals (taxa).
    pub fn ntax(&self) -> usize {
        self.individuals.len()
    }

    /// Number of variant records decoded so far.
    pub fn records(&self) -> usize {
        self.records
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn samples(&self) -> impl Iterator<Item = &str> {
        self.individuals.iter().map(Individual::name)
    }

    pub fn sequence(&self, name: &str) -> Option<&str> {
        self.individuals
            .iter()
            .find(|individual| individual.name == name)
            .map(Individual::sequence)
    }
}
