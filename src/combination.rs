//! Pairwise fusion of diploid records into tetraploid combinations

use crate::error::{PolyploidError, Result};
use crate::record::{add_records, Record};

/// A combined record together with the
/// indexes of the two records it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combination {
    pub first: usize,
    pub second: usize,
    pub record: Record,
}

/// Number of unordered pairs of `n` records
pub fn num_combinations(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

/// Add each record to every record after it.
///
/// A record is never added to itself and each unordered
/// pair is visited once, ordered by the first index and then
/// by the second: (0, 1), (0, 2), ..., (1, 2), ...
#[inline(never)]
pub fn combinations(records: &[Record]) -> Result<Vec<Combination>> {
    if records.is_empty() {
        return Err(PolyploidError::invalid_input("no records to combine"));
    }
    let mut rv = Vec::with_capacity(num_combinations(records.len()));
    for (first, reference) in records.iter().enumerate() {
        for (second, partner) in records.iter().enumerate().skip(first + 1) {
            let record = add_records(reference, partner)?;
            rv.push(Combination {
                first,
                second,
                record,
            });
        }
    }
    Ok(rv)
}

/// Like [`combinations`], keeping only the combined records.
pub fn combine(records: &[Record]) -> Result<Vec<Record>> {
    Ok(combinations(records)?
        .into_iter()
        .map(|c| c.record)
        .collect())
}
