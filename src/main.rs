//! affine-offset binary
//!
//! Recovers the offset vector of the bundled (or a user supplied) message and
//! decodes it.

use affine_offset::dataset::{ENCRYPTED_MESSAGE, EXPECTED_PREFIX, FORWARD_MATRIX};
use affine_offset::reporters::{ConsoleSearchReporter, SearchReporter, SilentSearchReporter};
use affine_offset::search::{self, narrow, CancellationToken, SearchConfig};
use affine_offset::{decode_message, samples, DecodeMode, GridBounds, Vector3};
use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

fn main() -> Result<()> {
    affine_offset::logging::init();

    let matches = affine_offset::parse_args();
    match matches.subcommand() {
        Some(("solve", sub)) => with_reporter(sub, run_solve),
        Some(("decode", sub)) => with_reporter(sub, run_decode),
        Some(("narrow", sub)) => run_narrow(sub),
        _ => unreachable!("subcommand_required"),
    }
}

/// Pick the reporter from `--quiet` / `--verbose` and run `f` with it
fn with_reporter(
    sub: &ArgMatches,
    f: fn(&ArgMatches, &dyn SearchReporter) -> Result<String>,
) -> Result<()> {
    if sub.get_flag("quiet") {
        let message = f(sub, &SilentSearchReporter)?;
        println!("{}", message);
    } else if sub.get_flag("verbose") {
        f(sub, &ConsoleSearchReporter::verbose())?;
    } else {
        f(sub, &ConsoleSearchReporter::new())?;
    }
    Ok(())
}

fn load_samples(sub: &ArgMatches) -> Result<Vec<Vector3>> {
    match sub.get_one::<String>("samples") {
        Some(path) => samples::load_samples(path)
            .with_context(|| format!("Failed to load ciphertext samples from {}", path)),
        None => Ok(ENCRYPTED_MESSAGE.to_vec()),
    }
}

fn grid(sub: &ArgMatches) -> GridBounds {
    GridBounds::new(sub.get_one::<u32>("grid").copied().unwrap_or_default())
}

fn run_solve(sub: &ArgMatches, reporter: &dyn SearchReporter) -> Result<String> {
    let samples = load_samples(sub)?;
    let expected: Vec<char> = match sub.get_one::<String>("expected") {
        Some(text) => text.chars().collect(),
        None => EXPECTED_PREFIX.to_vec(),
    };

    let inverse = FORWARD_MATRIX
        .invert()
        .context("Public key cannot be inverted")?;
    let pairs = search::known_pairs(&samples, &expected)?;
    let config = SearchConfig::from_args(sub);

    let offset = if sub.get_flag("sequential") {
        search::find_offset_sequential_with_reporter(&inverse, &pairs, &config, reporter)
    } else {
        search::find_offset_parallel_with_reporter(
            &inverse,
            &pairs,
            &config,
            &CancellationToken::new(),
            reporter,
        )
    }
    .context("Error finding offset")?;
    info!("Found 'r' value: {}", offset);

    let mode = if sub.get_flag("bounded") {
        DecodeMode::Bounded {
            offset,
            grid: grid(sub),
        }
    } else {
        DecodeMode::FullOffset(offset)
    };
    Ok(decode_message(&samples, &inverse, mode, reporter))
}

fn run_decode(sub: &ArgMatches, reporter: &dyn SearchReporter) -> Result<String> {
    let samples = load_samples(sub)?;
    let inverse = FORWARD_MATRIX
        .invert()
        .context("Public key cannot be inverted")?;

    let mode = match sub.get_one::<Vector3>("offset") {
        Some(&offset) => DecodeMode::FullOffset(offset),
        None => DecodeMode::Bounded {
            offset: sub.get_one::<Vector3>("partial").copied().unwrap_or_default(),
            grid: grid(sub),
        },
    };
    Ok(decode_message(&samples, &inverse, mode, reporter))
}

fn run_narrow(sub: &ArgMatches) -> Result<()> {
    let samples = load_samples(sub)?;
    let target = sub.get_one::<char>("char").copied().unwrap_or('H');
    let limit = sub.get_one::<u32>("limit").copied().unwrap_or(100);

    let candidates = narrow::candidate_offsets(
        &FORWARD_MATRIX,
        target,
        &samples,
        grid(sub),
        0.0..f64::from(limit),
    );
    for c in &candidates {
        println!(
            "rand1={} rand2={} sample={} offset={}",
            c.rand1, c.rand2, c.sample_index, c.offset
        );
    }
    println!("{} candidates", candidates.len());
    Ok(())
}
