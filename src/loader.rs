use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{PolyploidError, Result};
use crate::record::Record;

/// Read one record per non-empty line of `path`.
///
/// The input has no header row and no labels. Each line
/// is stripped of trailing whitespace and split on `delimiter`.
/// Lines are not checked for a consistent number of fields here.
pub fn load<P: AsRef<Path>>(path: P, delimiter: &str) -> Result<Vec<Record>> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(PolyploidError::configuration("input file name is empty"));
    }
    let file = File::open(path).map_err(|source| PolyploidError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(BufReader::new(file), delimiter)
}

pub fn read_records<R: BufRead>(reader: R, delimiter: &str) -> Result<Vec<Record>> {
    if delimiter.is_empty() {
        return Err(PolyploidError::configuration("input delimiter is empty"));
    }
    let mut records = vec![];
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        records.push(line.split(delimiter).collect::<Record>());
    }
    Ok(records)
}
