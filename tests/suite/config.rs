//! Config file driving a search

use std::fs;

use nthprime_config::{ConfigError, NthPrimeConfig};
use nthprime_core::{PrimeIndex, PrimeSearch, WitnessPolicy};

#[test]
fn config_file_drives_search_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[search]
witnesses = "standard"
progress_interval = 100

[log]
level = "nthprime_core=debug"
"#,
    )
    .unwrap();

    let config = NthPrimeConfig::load_from(&path).unwrap().unwrap();
    let options = config.search_options();
    assert_eq!(options.witnesses, WitnessPolicy::Standard);
    assert_eq!(config.log_level(), Some("nthprime_core=debug"));

    let report = PrimeSearch::new(options)
        .find(PrimeIndex::new(1_000).unwrap())
        .unwrap();
    assert_eq!(report.prime, 7_919);
}

#[test]
fn unreadable_config_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    // A directory exists but cannot be read as a file.
    let err = NthPrimeConfig::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(err.path(), Some(dir.path()));
}
