use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::fmt::SubscriberBuilder;
use trisweep::gen::SuiteCfg;
use trisweep::Algorithm;

mod harness;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Point-in-triangle counting benchmarks", version = trisweep::VERSION)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Count containments for every .txt dataset in a folder and report mean timings
    Run {
        /// sweep, brute-force, kd-tree, or all
        #[arg(long, default_value = "sweep")]
        algo: AlgoSel,
        /// Timed calls per file and algorithm (after one untimed call)
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        repetitions: u32,
        /// Also write a file,algorithm,result,mean_ms CSV table
        #[arg(long)]
        summary_csv: Option<PathBuf>,
        input_folder: PathBuf,
        output_file: PathBuf,
    },
    /// Write the generated benchmark suite as .txt datasets
    Gen {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Divide every dataset size by this factor
        #[arg(long, default_value_t = 1)]
        shrink: usize,
    },
}

/// Algorithms selected by `--algo`.
#[derive(Clone, Debug)]
struct AlgoSel(Vec<Algorithm>);

impl FromStr for AlgoSel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(AlgoSel(Algorithm::ALL.to_vec()));
        }
        s.parse().map(|a| AlgoSel(vec![a]))
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            algo,
            repetitions,
            summary_csv,
            input_folder,
            output_file,
        } => {
            tracing::info!(
                algos = ?algo.0,
                repetitions,
                input = %input_folder.display(),
                output = %output_file.display(),
                "run"
            );
            let reports = harness::run(&harness::RunOpts {
                algorithms: algo.0,
                repetitions,
                input: input_folder,
                output: output_file,
                summary_csv,
            })?;
            tracing::info!(sections = reports.len(), "run_done");
            Ok(())
        }
        Action::Gen { out, seed, shrink } => {
            let written = harness::generate(&out, SuiteCfg { seed, shrink })?;
            tracing::info!(files = written.len(), out = %out.display(), "gen_done");
            Ok(())
        }
    }
}
