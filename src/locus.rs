use std::collections::HashSet;
use std::ops::Range;

use crate::error::{PolyploidError, Result};
use crate::record::Record;

/// Widths of consecutive loci.
///
/// E.g. `[2, 4, 3]` describes 3 loci: the first spans
/// columns 0..2, the second 2..6 and the last 6..9.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocusPartition {
    widths: Vec<usize>,
}

impl LocusPartition {
    pub fn new(widths: Vec<usize>) -> Result<Self> {
        if widths.is_empty() {
            return Err(PolyploidError::invalid_input("locus widths are empty"));
        }
        if let Some(locus) = widths.iter().position(|&w| w == 0) {
            return Err(PolyploidError::configuration(format!(
                "locus {} has zero width",
                locus + 1
            )));
        }
        Ok(Self { widths })
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn num_loci(&self) -> usize {
        self.widths.len()
    }

    /// Total number of marker columns
    pub fn num_alleles(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Column range of each locus, in order
    pub fn spans(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.widths.iter().scan(0_usize, |start, &width| {
            let span = *start..*start + width;
            *start += width;
            Some(span)
        })
    }
}

/// How the presence count of a locus is checked
/// against the upper threshold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LocusRule {
    /// Reject a locus with no present allele AND more
    /// present alleles than the threshold.
    /// No locus can satisfy both, so nothing is rejected.
    #[default]
    Literal,
    /// Reject a locus with no present allele OR more
    /// present alleles than the threshold.
    Intended,
}

impl LocusRule {
    pub fn violates(&self, num_present: usize, upper_threshold: usize) -> bool {
        let absent = num_present == 0;
        let over = num_present > upper_threshold;
        match self {
            LocusRule::Literal => absent && over,
            LocusRule::Intended => absent || over,
        }
    }
}

/// How rejected records are taken out of the output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Removal {
    /// Drop exactly the rejected records
    #[default]
    ByIndex,
    /// Drop every record equal in content to a rejected one
    ByValue,
}

#[derive(Clone, Debug)]
pub struct LocusFilter {
    pub partition: LocusPartition,
    pub upper_threshold: usize,
    pub rule: LocusRule,
    pub removal: Removal,
}

impl LocusFilter {
    pub fn new(partition: LocusPartition, upper_threshold: usize) -> Self {
        Self {
            partition,
            upper_threshold,
            rule: LocusRule::default(),
            removal: Removal::default(),
        }
    }

    pub fn rule(mut self, rule: LocusRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn removal(mut self, removal: Removal) -> Self {
        self.removal = removal;
        self
    }

    /// Index of the first locus of `record` that breaks the rule.
    ///
    /// Loci after the first violation are not examined.
    pub fn first_violation(&self, record: &Record) -> Result<Option<usize>> {
        if record.len() != self.partition.num_alleles() {
            return Err(PolyploidError::LengthMismatch {
                expected: self.partition.num_alleles(),
                actual: record.len(),
            });
        }
        Ok(self.partition.spans().position(|span| {
            self.rule
                .violates(record.count_present(span), self.upper_threshold)
        }))
    }

    /// Records that pass the check on every locus, in input order.
    #[inline(never)]
    pub fn filter(&self, records: &[Record]) -> Result<Vec<Record>> {
        if records.is_empty() {
            return Err(PolyploidError::invalid_input("no records to check"));
        }
        let mut rejected = vec![false; records.len()];
        for (index, record) in records.iter().enumerate() {
            if let Some(locus) = self.first_violation(record)? {
                log::debug!("record {} rejected at locus {}", index, locus + 1);
                rejected[index] = true;
            }
        }
        let kept = match self.removal {
            Removal::ByIndex => records
                .iter()
                .zip(rejected.iter())
                .filter_map(|(record, &r)| if r { None } else { Some(record.clone()) })
                .collect(),
            Removal::ByValue => {
                let rejected = records
                    .iter()
                    .zip(rejected.iter())
                    .filter_map(|(record, &r)| if r { Some(record) } else { None })
                    .collect::<HashSet<&Record>>();
                records
                    .iter()
                    .filter(|record| !rejected.contains(record))
                    .cloned()
                    .collect()
            }
        };
        Ok(kept)
    }
}
