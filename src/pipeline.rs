use std::path::PathBuf;

use rand::prelude::Rng;
use rand::SeedableRng;

use crate::combination::combine;
use crate::error::{PolyploidError, Result};
use crate::loader::load;
use crate::locus::LocusFilter;
use crate::params::PipelineParams;
use crate::sampler::sample;

#[derive(Debug)]
pub struct RunSummary {
    pub seed: u64,
    pub num_loaded: usize,
    pub num_combinations: usize,
    pub num_surviving: usize,
    pub files: Vec<PathBuf>,
}

/// Load, combine, check loci (microsatellites only) and
/// write the random result files.
///
/// Nothing is written unless every earlier stage succeeds.
pub fn run(params: PipelineParams) -> Result<RunSummary> {
    let params = params.validate()?;

    let records = load(&params.input, &params.delimiter)?;
    log::info!(
        "Loaded {} lines from {}",
        records.len(),
        params.input.display()
    );

    let locus_filter = if params.msat {
        let partition = params.partition()?;
        if let Some(record) = records.first() {
            if record.len() != partition.num_alleles() {
                return Err(PolyploidError::configuration(format!(
                    "loci describe {} alleles but records have {}",
                    partition.num_alleles(),
                    record.len()
                )));
            }
        }
        Some(
            LocusFilter::new(partition, params.threshold)
                .rule(params.locus_rule)
                .removal(params.removal),
        )
    } else {
        None
    };

    let combined = combine(&records)?;
    let num_combinations = combined.len();
    log::info!("Created {} combinations", num_combinations);

    let surviving = match &locus_filter {
        Some(f) => {
            let kept = f.filter(&combined)?;
            log::info!(
                "{} lines remaining after checking condition ({:?} rule, threshold {})",
                kept.len(),
                f.rule,
                f.upper_threshold
            );
            kept
        }
        None => {
            log::info!("Not microsatellite data, locus check skipped");
            combined
        }
    };

    let seed = params.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("Creating result files (seed {})", seed);
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let files = sample(
        &surviving,
        params.file_count,
        params.results_count,
        &params.output,
        &mut rng,
    )?;
    log::info!("Finished");

    Ok(RunSummary {
        seed,
        num_loaded: records.len(),
        num_combinations,
        num_surviving: surviving.len(),
        files,
    })
}
