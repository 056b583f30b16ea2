//! Error types shared by every stage of the conversion.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Vcf2MsaError {
    /// Input VCF could not be found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Input VCF exists but could not be opened or read
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An output artifact could not be created or written
    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data line is missing columns needed for decoding
    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    /// A genotype field has fewer than the five GT:AD:DP:GQ:PL positions
    #[error("Malformed genotype field at line {line} for sample {sample}: {field:?}")]
    MalformedGenotype {
        line: usize,
        sample: String,
        field: String,
    },
}

pub type Result<T> = std::result::Result<T, Vcf2MsaError>;

impl Vcf2MsaError {
    /// Attributes an input failure to `path`; decoding errors pass through.
    pub fn reading(path: &Path, err: Self) -> Self {
        match err {
            Self::Io(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Self::FileNotFound {
                    path: path.to_path_buf(),
                }
            }
            Self::Io(source) => Self::Read {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }

    pub fn writing(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn malformed_record(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }
}
