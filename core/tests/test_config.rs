use std::collections::HashMap;
use std::path::PathBuf;

use fitness_tracker_core::config::{ENV_OUTPUT, ENV_PACKAGES};
use fitness_tracker_core::{Config, OutputFormat, TrackerError};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_without_env() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.packages_path, None);
    assert_eq!(cfg.output, OutputFormat::Text);
}

#[test]
fn reads_path_and_format() {
    let cfg = Config::from_lookup(lookup(&[
        (ENV_PACKAGES, "data/packages.json"),
        (ENV_OUTPUT, "JSON"),
    ]))
    .unwrap();
    assert_eq!(cfg.packages_path, Some(PathBuf::from("data/packages.json")));
    assert_eq!(cfg.output, OutputFormat::Json);
}

#[test]
fn blank_path_means_builtin_packages() {
    let cfg = Config::from_lookup(lookup(&[(ENV_PACKAGES, "  ")])).unwrap();
    assert_eq!(cfg.packages_path, None);
}

#[test]
fn unknown_output_format_is_rejected() {
    let err = Config::from_lookup(lookup(&[(ENV_OUTPUT, "xml")])).unwrap_err();
    assert!(matches!(err, TrackerError::UnknownOutputFormat(ref f) if f == "xml"));
}
