use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use ket_matrix_cli::amplitude::{load_amplitude_job, run_amplitude, AmplitudeJob};
use ket_matrix_cli::matrix::{load_matrix_job, run_matrix_job, MatrixJob, MatrixOp};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("KET_MATRIX_LOG", "error,ket_matrix=info"))
        .init();

    let matches = Command::new("ket-matrix")
        .version(clap::crate_version!())
        .about("Exact integer matrix arithmetic and probability amplitudes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("amplitude")
                .about("Expand a state vector over an orthonormal pair of kets")
                .arg(
                    Arg::new("job")
                        .help("Path to amplitude job JSON file. Prints a template when omitted.")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("no_check")
                        .long("no-check")
                        .help("Skip the orthonormality check on the kets.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("matrix")
                .about("Apply a matrix operation (add, multiply, transpose, scale, is-identity)")
                .arg(
                    Arg::new("job")
                        .help("Path to matrix job JSON file. Prints a template when omitted.")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("op")
                        .long("op")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .help("Operation to run. Overrides the operation in the job file."),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("amplitude", sub_m)) => handle_amplitude(sub_m),
        Some(("matrix", sub_m)) => handle_matrix(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_amplitude(matches: &ArgMatches) -> Result<()> {
    let Some(job_path) = matches.get_one::<PathBuf>("job") else {
        println!("{}", serde_json::to_string_pretty(&AmplitudeJob::default())?);
        return Ok(());
    };
    log::info!("[ket-matrix::amplitude] Job: {:?}", job_path);

    let mut job = load_amplitude_job(job_path)?;
    if matches.get_flag("no_check") {
        job.require_orthonormal = false;
    }

    match run_amplitude(&job) {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Err(e) => {
            log::error!("Amplitude job failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_matrix(matches: &ArgMatches) -> Result<()> {
    let Some(job_path) = matches.get_one::<PathBuf>("job") else {
        println!("{}", serde_json::to_string_pretty(&MatrixJob::default())?);
        return Ok(());
    };
    log::info!("[ket-matrix::matrix] Job: {:?}", job_path);

    let mut job = load_matrix_job(job_path)?;
    if let Some(op) = matches.get_one::<String>("op") {
        job.op = MatrixOp::from_str(op).map_err(anyhow::Error::msg)?;
    }

    match run_matrix_job(&job) {
        Ok(outcome) => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            Ok(())
        }
        Err(e) => {
            log::error!("Matrix job failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
