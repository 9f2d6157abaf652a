use std::process::ExitCode;

use clap::Parser;

use insilico_polyploids::{run, PipelineParams};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = PipelineParams::parse();
    match run(params) {
        Ok(summary) => {
            println!(
                "{} {} {} {}",
                summary.num_loaded,
                summary.num_combinations,
                summary.num_surviving,
                summary.files.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
