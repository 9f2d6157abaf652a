use std::path::PathBuf;

use clap::Parser;

use crate::error::{PolyploidError, Result};
use crate::locus::{LocusPartition, LocusRule, Removal};

/// Build in silico tetraploids from diploid marker data
#[derive(Parser, Clone, Debug)]
#[command(version)]
pub struct PipelineParams {
    /// Input file, one individual per line, no headers or labels
    #[arg(short, long)]
    pub input: PathBuf,
    /// Field separator: "tab", "space", or any literal string
    #[arg(short, long, default_value = "tab", value_parser = parse_delimiter)]
    pub delimiter: String,
    /// Markers are microsatellites; check every locus of each combination
    #[arg(long)]
    pub msat: bool,
    /// Number of alleles in each locus, e.g. 2,4,3
    #[arg(short, long, value_delimiter = ',')]
    pub loci: Vec<usize>,
    /// Output prefix; files are named {output}_results_{i}.txt
    #[arg(short, long)]
    pub output: String,
    #[arg(short, long = "files", default_value = "3")]
    pub file_count: u32,
    /// Combinations picked at random for each file
    #[arg(short = 'n', long = "results", default_value = "30")]
    pub results_count: usize,
    /// Maximum number of present alleles in one locus
    #[arg(short, long, default_value = "4")]
    pub threshold: usize,
    #[arg(long, value_enum, default_value_t = LocusRule::Literal)]
    pub locus_rule: LocusRule,
    #[arg(long, value_enum, default_value_t = Removal::ByIndex)]
    pub removal: Removal,
    #[arg(short, long)]
    pub seed: Option<u64>,
}

fn parse_delimiter(value: &str) -> std::result::Result<String, String> {
    let delimiter = match value {
        "tab" | "\\t" => "\t".to_string(),
        "space" => " ".to_string(),
        _ => value.replace("\\t", "\t"),
    };
    if delimiter.is_empty() {
        Err("delimiter must not be empty".to_string())
    } else {
        Ok(delimiter)
    }
}

impl PipelineParams {
    pub fn new<P: Into<PathBuf>>(input: P, output: &str) -> Self {
        Self {
            input: input.into(),
            delimiter: "\t".to_string(),
            msat: false,
            loci: vec![],
            output: output.to_string(),
            file_count: 3,
            results_count: 30,
            threshold: 4,
            locus_rule: LocusRule::default(),
            removal: Removal::default(),
            seed: None,
        }
    }

    /// Check everything that can be checked before reading the input.
    pub fn validate(self) -> Result<Self> {
        if self.input.as_os_str().is_empty() {
            return Err(PolyploidError::configuration("input file name is empty"));
        }
        if self.delimiter.is_empty() {
            return Err(PolyploidError::configuration("input delimiter is empty"));
        }
        if self.output.is_empty() {
            return Err(PolyploidError::configuration("output file name is empty"));
        }
        if self.file_count == 0 {
            return Err(PolyploidError::configuration(
                "files count must be integer greater than 0",
            ));
        }
        if self.results_count == 0 {
            return Err(PolyploidError::configuration(
                "results count must be integer greater than 0",
            ));
        }
        if self.msat {
            self.partition()?;
        }
        Ok(self)
    }

    pub fn partition(&self) -> Result<LocusPartition> {
        if self.loci.is_empty() {
            return Err(PolyploidError::configuration(
                "microsatellite data need the number of alleles in each locus",
            ));
        }
        LocusPartition::new(self.loci.clone())
    }
}
