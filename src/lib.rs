//! In silico autotetraploids from diploid marker data.
//!
//! Every pair of diploid individuals is fused into one
//! tetraploid record (the union of their present alleles),
//! microsatellite combinations are checked locus by locus,
//! and random sets of the survivors are written to files.

pub mod combination;
pub mod error;
pub mod loader;
pub mod locus;
pub mod params;
pub mod pipeline;
pub mod record;
pub mod sampler;

pub use combination::{combinations, combine, Combination};
pub use error::{PolyploidError, Result};
pub use loader::load;
pub use locus::{LocusFilter, LocusPartition, LocusRule, Removal};
pub use params::PipelineParams;
pub use pipeline::{run, RunSummary};
pub use record::{add_records, Record};
pub use sampler::sample;
