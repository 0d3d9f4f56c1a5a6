//! End-to-end pipeline tests: input file through validation to the written
//! JSON document.

use std::fs;
use std::path::PathBuf;

use poolforge::cli::generate;
use poolforge::input::DEFAULT_SAMPLE;
use poolforge::pools::Whitelist;
use poolforge::AppConfig;

fn config_in(dir: &tempfile::TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.generator.input_file = dir.path().join("fqdn_input.txt");
    config.generator.output_file = dir.path().join("pools_output.json");
    config
}

fn read_pools(path: &PathBuf) -> serde_json::Map<String, serde_json::Value> {
    let raw = fs::read_to_string(path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    value.get("POOLS").unwrap().as_object().unwrap().clone()
}

#[test]
fn generates_two_pools_per_accepted_record() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    fs::write(
        &config.generator.input_file,
        "Foo.example.com 80\nfoo.example.com 80\nbar.example.com 81\nbad_host 99999\n",
    )
    .unwrap();

    generate::run(&config).unwrap();

    // Foo/foo dedup to one record; bad_host is rejected on both checks.
    let pools = read_pools(&config.generator.output_file);
    assert_eq!(pools.len(), 4);
    assert!(pools.contains_key("CUSTOMER_FOO_80_HTTPS"));
    assert!(pools.contains_key("CUSTOMER_FOO_80_HTTP"));
    assert!(pools.contains_key("CUSTOMER_BAR_81_HTTPS"));
    assert!(pools.contains_key("CUSTOMER_BAR_81_HTTP"));
}

#[test]
fn missing_input_is_bootstrapped_with_the_sample() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    generate::run(&config).unwrap();

    assert_eq!(
        fs::read_to_string(&config.generator.input_file).unwrap(),
        DEFAULT_SAMPLE
    );
    // The sample accepts three records (one duplicate, two invalid lines).
    let pools = read_pools(&config.generator.output_file);
    assert_eq!(pools.len(), 6);
}

#[test]
fn https_pool_matches_golden_values() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    fs::write(&config.generator.input_file, "o.glb.ac.com\t12345\n").unwrap();

    generate::run(&config).unwrap();

    let pools = read_pools(&config.generator.output_file);
    assert_eq!(pools.len(), 2);
    let https = pools.get("CUSTOMER_O_12345_HTTPS").unwrap();
    assert_eq!(https["regexUrl"], "^https://(o[.]glb[.]ac[.]com):443/");
    assert_eq!(https["poolName"], "CUSTOMER_O_12345");
    assert_eq!(https["description"], "CUSTOMER_O_12345 HTTPS Pool Selection");
    assert_eq!(https["excludeLog"], false);
    assert_eq!(https["urlQueryStringReplaceEncodeFull"], true);
    assert_eq!(https["whitelist"], "${CONSTANTS:my_whitelist}");

    let http = pools.get("CUSTOMER_O_12345_HTTP").unwrap();
    assert_eq!(http["regexUrl"], "^http://(o[.]glb[.]ac[.]com):443/");
}

#[test]
fn https_key_precedes_http_key_in_the_written_document() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    fs::write(&config.generator.input_file, "o.glb.ac.com 12345\n").unwrap();

    generate::run(&config).unwrap();

    let raw = fs::read_to_string(&config.generator.output_file).unwrap();
    let https = raw.find("\"CUSTOMER_O_12345_HTTPS\"").unwrap();
    let http = raw.find("\"CUSTOMER_O_12345_HTTP\"").unwrap();
    assert!(https < http);
}

#[test]
fn literal_whitelist_is_copied_into_every_pool() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(&dir);
    config.pools.whitelist =
        Whitelist::Literal(vec!["10.0.0.0/8".to_string(), "fqdn1.sld.tld".to_string()]);
    fs::write(&config.generator.input_file, "o.glb.ac.com 12345\n").unwrap();

    generate::run(&config).unwrap();

    let pools = read_pools(&config.generator.output_file);
    for (_, pool) in pools {
        assert_eq!(
            pool.get("whitelist").unwrap(),
            &serde_json::json!(["10.0.0.0/8", "fqdn1.sld.tld"])
        );
    }
}

#[test]
fn check_only_mode_writes_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(&dir);
    config.generator.check_only = true;
    fs::write(&config.generator.input_file, "o.glb.ac.com 12345\n").unwrap();

    generate::run(&config).unwrap();

    assert!(!config.generator.output_file.exists());
}

#[test]
fn invalid_only_input_produces_an_empty_pools_object() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    fs::write(&config.generator.input_file, "bad_host 99999\nalso bad lines here\n").unwrap();

    generate::run(&config).unwrap();

    let pools = read_pools(&config.generator.output_file);
    assert!(pools.is_empty());
}
