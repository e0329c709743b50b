//! Command-line parsing and settings resolution

use std::fs;

use clap::Parser;
use sentinel_console::Args;
use sentinel_core::Error;
use sentinel_stream::TransportSecurity;
use tempfile::tempdir;

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("sentinel").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_defaults_target_local_server() {
    let dir = tempdir().unwrap();
    let args = parse(&[]);

    let settings = args.settings(dir.path()).unwrap();
    let endpoints = args.endpoints(&settings).unwrap();

    assert_eq!(endpoints.logs.as_str(), "ws://127.0.0.1:8000/ws/logs");
    assert_eq!(
        endpoints.directives.as_str(),
        "ws://127.0.0.1:8000/ws/directives"
    );
    assert_eq!(endpoints.api_base.as_str(), "http://127.0.0.1:8000/");
}

#[test]
fn test_remote_host_uses_secure_schemes() {
    let dir = tempdir().unwrap();
    let args = parse(&["--host", "sentinel.example.com"]);

    let settings = args.settings(dir.path()).unwrap();
    let endpoints = args.endpoints(&settings).unwrap();

    assert_eq!(
        endpoints.logs.as_str(),
        "wss://sentinel.example.com/ws/logs"
    );
    assert_eq!(endpoints.api_base.scheme(), "https");
}

#[test]
fn test_insecure_flag_overrides_auto() {
    let dir = tempdir().unwrap();
    let args = parse(&["--host", "10.0.0.5:9000", "--insecure"]);
    assert_eq!(args.security(), Some(TransportSecurity::Insecure));

    let settings = args.settings(dir.path()).unwrap();
    let endpoints = args.endpoints(&settings).unwrap();
    assert_eq!(endpoints.logs.as_str(), "ws://10.0.0.5:9000/ws/logs");
}

#[test]
fn test_secure_and_insecure_conflict() {
    let result = Args::try_parse_from(["sentinel", "--secure", "--insecure"]);
    assert!(result.is_err());
}

#[test]
fn test_host_flag_overrides_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        r#"
[server]
host = "collector.internal:8443"
logs_path = "/stream/logs"
"#,
    )
    .unwrap();

    let config = path.to_str().unwrap();
    let args = parse(&["--config", config, "--host", "localhost:8001"]);
    let settings = args.settings(dir.path()).unwrap();
    assert_eq!(settings.server.host, "localhost:8001");

    let endpoints = args.endpoints(&settings).unwrap();
    assert_eq!(endpoints.logs.as_str(), "ws://localhost:8001/stream/logs");
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let args = parse(&["--config", missing.to_str().unwrap()]);

    let result = args.settings(dir.path());
    assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
}

#[test]
fn test_host_with_scheme_is_rejected() {
    let dir = tempdir().unwrap();
    let args = parse(&["--host", "ws://localhost:8000"]);
    let settings = args.settings(dir.path()).unwrap();

    assert!(args.endpoints(&settings).is_err());
}
