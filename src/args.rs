use crate::linalg::Vector3;
use clap::{Arg, ArgAction, Command};
use std::fs;

fn samples_arg() -> Arg {
    Arg::new("samples")
        .short('i')
        .long("samples")
        .help("File with one ciphertext vector per line (default: bundled message)")
        .value_name("FILE")
        .value_parser(|input: &str| {
            let path = fs::canonicalize(input).map_err(|_| "Failed to resolve samples path")?;
            if path.is_file() {
                Ok(path.to_string_lossy().to_string())
            } else {
                Err(String::from("Samples file does not exist"))
            }
        })
}

fn quiet_arg() -> Arg {
    Arg::new("quiet")
        .short('q')
        .long("quiet")
        .help("Quiet mode - only print the decoded message")
        .action(ArgAction::SetTrue)
}

fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help("Print per-worker and per-character progress")
        .action(ArgAction::SetTrue)
        .conflicts_with("quiet")
}

fn grid_arg() -> Arg {
    Arg::new("grid")
        .short('g')
        .long("grid")
        .help("Upper bound (inclusive) of the 0..=N trial grid")
        .value_name("N")
        .value_parser(clap::value_parser!(u32))
        .default_value("100")
}

pub fn build_cli() -> Command {
    Command::new("affine-offset")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Recover the offset vector of an affine 3x3 cipher and decode the message")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .visible_alias("s")
                .about("Search for the offset with known plaintext, then decode")
                .arg(samples_arg())
                .arg(
                    Arg::new("expected")
                        .short('e')
                        .long("expected")
                        .help("Known plaintext prefix of the message")
                        .value_name("TEXT")
                        .default_value("HTB"),
                )
                .arg(
                    Arg::new("bound")
                        .short('b')
                        .long("bound")
                        .help("Search every coordinate over -N..=N")
                        .value_name("N")
                        .default_value("10000"),
                )
                .arg(
                    Arg::new("workers")
                        .short('w')
                        .long("workers")
                        .help("Number of search workers")
                        .value_name("N")
                        .default_value("8"),
                )
                .arg(
                    Arg::new("timeout")
                        .short('t')
                        .long("timeout")
                        .help("Give up after this many seconds (0 = no limit)")
                        .value_name("SECS")
                        .default_value("0"),
                )
                .arg(
                    Arg::new("race")
                        .long("race")
                        .help("Let the first exhausted worker end the search")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("sequential")
                        .long("sequential")
                        .help("Use the single-threaded search")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("race"),
                )
                .arg(
                    Arg::new("bounded")
                        .long("bounded")
                        .help("Decode with the grid search, using the found offset as the known part")
                        .action(ArgAction::SetTrue),
                )
                .arg(grid_arg())
                .arg(quiet_arg())
                .arg(verbose_arg()),
        )
        .subcommand(
            Command::new("decode")
                .visible_alias("d")
                .about("Decode without searching")
                .arg(samples_arg())
                .arg(
                    Arg::new("offset")
                        .short('o')
                        .long("offset")
                        .help("Known offset X,Y,Z (full-offset mode)")
                        .value_name("X,Y,Z")
                        .value_parser(parse_vector),
                )
                .arg(
                    Arg::new("partial")
                        .short('p')
                        .long("partial")
                        .help("Assumed offset for grid decoding")
                        .value_name("X,Y,Z")
                        .value_parser(parse_vector)
                        .conflicts_with("offset"),
                )
                .arg(grid_arg())
                .arg(quiet_arg())
                .arg(verbose_arg()),
        )
        .subcommand(
            Command::new("narrow")
                .visible_alias("n")
                .about("List small offsets consistent with one known character")
                .arg(samples_arg())
                .arg(
                    Arg::new("char")
                        .short('c')
                        .long("char")
                        .help("Known plaintext character")
                        .value_name("CHAR")
                        .value_parser(clap::value_parser!(char))
                        .default_value("H"),
                )
                .arg(
                    Arg::new("limit")
                        .short('l')
                        .long("limit")
                        .help("Accept offsets with every component in 0..LIMIT")
                        .value_name("LIMIT")
                        .value_parser(clap::value_parser!(u32))
                        .default_value("100"),
                )
                .arg(grid_arg()),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}

/// Parse `X,Y,Z` into a vector
pub fn parse_vector(input: &str) -> Result<Vector3, String> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected X,Y,Z, got {:?}", input));
    };
    let coord = |s: &str| {
        s.parse::<f64>()
            .map_err(|_| format!("invalid coordinate {:?}", s))
    };
    Ok(Vector3::new(coord(x)?, coord(y)?, coord(z)?))
}
