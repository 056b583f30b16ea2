//! Haploid genotype decoding.
//!
//! A sample column is a `GT:AD:DP:GQ:PL` tuple. Only the call (`GT`) and the
//! likelihoods (`PL`) are consulted; the remaining positions are ignored.

const FIELD_SEPARATOR: char = ':';

const GT_INDEX: usize = 0;
const PL_INDEX: usize = 4;

/// Likelihoods marking a site with no usable data.
///
/// Matched as an exact string: `0,0,0` is not treated as missing.
pub const MISSING_LIKELIHOOD: &str = "0,0";
pub const REFERENCE_CALL: &str = "0";

pub const MISSING_BASE: &str = "N";

/// The base called for one sample at one site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base<'a> {
    Missing,
    Reference(&'a str),
    Alternate(&'a str),
}

impl<'a> Base<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Base::Missing => MISSING_BASE,
            Base::Reference(allele) | Base::Alternate(allele) => allele,
        }
    }
}

/// Decodes a single genotype field against the record's alleles.
///
/// Returns `None` when the field has fewer than five colon-delimited
/// positions. Any call other than `0` (including `1`, `2` and `.`) resolves
/// to the alternate allele.
pub fn decode<'a>(reference: &'a str, alternate: &'a str, field: &str) -> Option<Base<'a>> {
    let parts: Vec<&str> = field.split(FIELD_SEPARATOR).collect();
    let likelihood = *parts.get(PL_INDEX)?;
    let call = parts[GT_INDEX];

    let base = if likelihood == MISSING_LIKELIHOOD {
        Base::Missing
    } else if call == REFERENCE_CALL {
        Base::Reference(reference)
    } else {
        Base::Alternate(alternate)
    };

    Some(base)
}
