//! Tests for search configuration and its command-line mapping

use affine_offset::args::build_cli;
use affine_offset::search::{Aggregation, SearchConfig, SearchError};
use std::time::Duration;

fn solve_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["affine-offset", "solve"];
    argv.extend_from_slice(args);
    let matches = build_cli().get_matches_from(argv);
    matches.subcommand_matches("solve").unwrap().clone()
}

#[test]
fn test_from_args_defaults() {
    let config = SearchConfig::from_args(&solve_matches(&[]));
    assert_eq!(config.bound, 10_000);
    assert_eq!(config.workers, 8);
    assert_eq!(config.aggregation, Aggregation::AwaitAll);
    assert_eq!(config.deadline, None);
}

#[test]
fn test_from_args_overrides() {
    let config = SearchConfig::from_args(&solve_matches(&[
        "--bound", "50", "--workers", "3", "--race", "--timeout", "5",
    ]));
    assert_eq!(config.bound, 50);
    assert_eq!(config.workers, 3);
    assert_eq!(config.aggregation, Aggregation::FirstReport);
    assert_eq!(config.deadline, Some(Duration::from_secs(5)));
    assert_eq!(config.axis(), (-50, 50));
    assert_eq!(config.axis_width(), 101);
}

#[test]
fn test_unparseable_values_fall_back() {
    let config = SearchConfig::from_args(&solve_matches(&["--workers", "many"]));
    assert_eq!(config.workers, 8);
}

#[test]
fn test_sequential_conflicts_with_race() {
    let result = build_cli().try_get_matches_from(["affine-offset", "solve", "--sequential", "--race"]);
    assert!(result.is_err());
}

#[test]
fn test_validate_messages() {
    let err = SearchConfig::new(10, 0).validate().unwrap_err();
    assert!(matches!(err, SearchError::InvalidConfig(_)));
    assert!(err.to_string().contains("worker count"));
}
