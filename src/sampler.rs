use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::{PolyploidError, Result};
use crate::record::Record;

/// `{prefix}_results_{file}.txt`
pub fn output_path(prefix: &str, file: u32) -> PathBuf {
    PathBuf::from(format!("{}_results_{}.txt", prefix, file))
}

/// Draw `count` distinct indexes from `0..available`.
///
/// The indexes come back in the order they were drawn.
pub fn draw_selection<R: Rng + ?Sized>(
    rng: &mut R,
    available: usize,
    count: usize,
) -> Result<Vec<usize>> {
    if count == 0 {
        return Err(PolyploidError::configuration(
            "results count must be integer greater than 0",
        ));
    }
    if count > available {
        return Err(PolyploidError::configuration(format!(
            "cannot pick {} distinct results from {} records",
            count, available
        )));
    }
    Ok(rand::seq::index::sample(rng, available, count).into_vec())
}

/// Write the selected records to `path`, one tab-joined record per line.
pub fn write_selection(path: &Path, records: &[Record], selection: &[usize]) -> Result<()> {
    let file = File::create(path).map_err(|source| PolyploidError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(BufWriter::new(file));
    for &index in selection {
        writer.write_record(records[index].alleles())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `file_count` files of `per_file` records each.
///
/// Records are drawn without replacement within a file.
/// Every file is an independent draw, so a record may
/// show up in more than one file.
pub fn sample<R: Rng + ?Sized>(
    records: &[Record],
    file_count: u32,
    per_file: usize,
    prefix: &str,
    rng: &mut R,
) -> Result<Vec<PathBuf>> {
    if records.is_empty() {
        return Err(PolyploidError::invalid_input("no records to sample from"));
    }
    if file_count == 0 {
        return Err(PolyploidError::configuration(
            "files count must be integer greater than 0",
        ));
    }
    if prefix.is_empty() {
        return Err(PolyploidError::configuration("output file name is empty"));
    }
    let mut written = vec![];
    for file in 1..=file_count {
        let path = output_path(prefix, file);
        let selection = draw_selection(rng, records.len(), per_file)?;
        write_selection(&path, records, &selection)?;
        log::info!("Wrote {} records to {}", selection.len(), path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::SeedableRng;

    fn numbered_records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new(vec![i.to_string(), "1".to_string(), "0".to_string()]))
            .collect()
    }

    fn read_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    proptest! {
        #[test]
        fn test_selection_is_distinct(seed in 0..u64::MAX,
                                      available in 1..500_usize,
                                      fraction in 0.0..=1.0_f64)
        {
            let count = ((available as f64 * fraction) as usize).max(1);
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            let selection = draw_selection(&mut rng, available, count).unwrap();
            prop_assert_eq!(selection.len(), count);
            prop_assert!(selection.iter().all(|&i| i < available));
            let unique = selection.iter().collect::<HashSet<_>>();
            prop_assert_eq!(unique.len(), count);
        }
    }

    #[test]
    fn test_selection_of_everything() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(101);
        let mut selection = draw_selection(&mut rng, 50, 50).unwrap();
        selection.sort_unstable();
        assert_eq!(selection, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_selection_larger_than_input() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        assert!(matches!(
            draw_selection(&mut rng, 3, 4),
            Err(PolyploidError::Configuration(_))
        ));
    }

    #[test]
    fn test_empty_selection() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        assert!(matches!(
            draw_selection(&mut rng, 3, 0),
            Err(PolyploidError::Configuration(_))
        ));
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path("data/AMAU_2x", 3),
            PathBuf::from("data/AMAU_2x_results_3.txt")
        );
    }

    #[test]
    fn test_sample_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("run");
        let prefix = prefix.to_str().unwrap();
        let records = numbered_records(20);
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        let written = sample(&records, 3, 5, prefix, &mut rng).unwrap();
        assert_eq!(written.len(), 3);
        for (i, path) in written.iter().enumerate() {
            assert_eq!(path, &output_path(prefix, i as u32 + 1));
            let lines = read_lines(path);
            assert_eq!(lines.len(), 5);
            let ids = lines
                .iter()
                .map(|l| {
                    let fields = l.split('\t').collect::<Vec<_>>();
                    assert_eq!(fields.len(), 3);
                    assert_eq!(&fields[1..], &["1", "0"]);
                    fields[0].parse::<usize>().unwrap()
                })
                .collect::<HashSet<_>>();
            assert_eq!(ids.len(), 5);
        }
    }

    #[test]
    fn test_sample_every_record_once() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("all");
        let prefix = prefix.to_str().unwrap();
        let records = numbered_records(12);
        let mut rng = rand::rngs::StdRng::seed_from_u64(12);

        let written = sample(&records, 1, records.len(), prefix, &mut rng).unwrap();
        let mut ids = read_lines(&written[0])
            .iter()
            .map(|l| l.split('\t').next().unwrap().parse::<usize>().unwrap())
            .collect::<Vec<_>>();
        ids.sort_unstable();
        assert_eq!(ids, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_files_are_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("again");
        let prefix = prefix.to_str().unwrap();
        std::fs::write(output_path(prefix, 1), "stale\nstale\nstale\nstale\n").unwrap();
        let records = numbered_records(4);
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);

        sample(&records, 1, 2, prefix, &mut rng).unwrap();
        let lines = read_lines(&output_path(prefix, 1));
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l != "stale"));
    }

    #[test]
    fn test_same_seed_same_files() {
        let dir = tempfile::tempdir().unwrap();
        let records = numbered_records(30);
        let first = dir.path().join("first");
        let second = dir.path().join("second");

        let mut rng = rand::rngs::StdRng::seed_from_u64(2023);
        let a = sample(&records, 2, 10, first.to_str().unwrap(), &mut rng).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(2023);
        let b = sample(&records, 2, 10, second.to_str().unwrap(), &mut rng).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(read_lines(x), read_lines(y));
        }
    }

    #[test]
    fn test_zero_files() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        assert!(matches!(
            sample(&numbered_records(3), 0, 1, "out", &mut rng),
            Err(PolyploidError::Configuration(_))
        ));
    }

    #[test]
    fn test_no_records() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        assert!(matches!(
            sample(&[], 1, 1, "out", &mut rng),
            Err(PolyploidError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("missing").join("out");
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        assert!(matches!(
            sample(&numbered_records(3), 1, 1, prefix.to_str().unwrap(), &mut rng),
            Err(PolyploidError::Open { .. })
        ));
    }
}
