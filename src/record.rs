use crate::error::{PolyploidError, Result};

pub const PRESENT: &str = "1";
pub const ABSENT: &str = "0";

/// Presence/absence tokens of one individual, or of a
/// combination of two individuals.
///
/// The tokens are kept exactly as read. Anything that
/// trims to "1" counts as a present allele; every other
/// token is absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Record {
    alleles: Vec<String>,
}

impl Record {
    pub fn new(alleles: Vec<String>) -> Self {
        Self { alleles }
    }

    pub fn alleles(&self) -> &[String] {
        &self.alleles
    }

    pub fn len(&self) -> usize {
        self.alleles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alleles.is_empty()
    }

    pub fn is_present(&self, index: usize) -> bool {
        is_present_token(&self.alleles[index])
    }

    /// Number of present alleles within `range`
    pub fn count_present(&self, range: std::ops::Range<usize>) -> usize {
        self.alleles[range]
            .iter()
            .filter(|a| is_present_token(a))
            .count()
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|s| s.into()).collect())
    }
}

fn is_present_token(token: &str) -> bool {
    token.trim() == PRESENT
}

/// Position-wise union of two records.
///
/// The output has "1" wherever either input has a present
/// allele and "0" everywhere else.
pub fn add_records(first: &Record, second: &Record) -> Result<Record> {
    if first.is_empty() {
        return Err(PolyploidError::invalid_input("first record is empty"));
    }
    if second.is_empty() {
        return Err(PolyploidError::invalid_input("second record is empty"));
    }
    if first.len() != second.len() {
        return Err(PolyploidError::LengthMismatch {
            expected: first.len(),
            actual: second.len(),
        });
    }
    Ok((0..first.len())
        .map(|k| {
            if first.is_present(k) || second.is_present(k) {
                PRESENT
            } else {
                ABSENT
            }
        })
        .collect())
}
