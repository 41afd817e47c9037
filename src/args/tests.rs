use super::*;
use crate::args::parsers::parse_positive_usize;
use crate::error::ValidationError;
use clap::Parser;
use std::time::Duration;

fn parse(args: &[&str]) -> Result<SmokeArgs, String> {
    let argv = std::iter::once("contact-smoke").chain(args.iter().copied());
    SmokeArgs::try_parse_from(argv).map_err(|err| format!("parse failed: {}", err))
}

#[test]
fn no_arguments_leaves_test_unset() -> Result<(), String> {
    let args = parse(&[])?;
    if args.test.is_some() {
        return Err("Expected no test".to_owned());
    }
    if args.strict || args.quiet || args.require_login || args.list {
        return Err("Expected flags to default to false".to_owned());
    }
    Ok(())
}

#[test]
fn unknown_test_name_is_accepted_by_clap() -> Result<(), String> {
    let args = parse(&["NoSuchTest"])?;
    if args.test.as_deref() != Some("NoSuchTest") {
        return Err(format!("Unexpected test: {:?}", args.test));
    }
    Ok(())
}

#[test]
fn parses_flags() -> Result<(), String> {
    let args = parse(&[
        "gettest",
        "--base-url",
        "http://127.0.0.1:9000/api",
        "--timeout",
        "5s",
        "--network-timeout",
        "250ms",
        "--concurrent-requests",
        "3",
        "--strict",
        "--require-login",
    ])?;
    let base = args.base_url.ok_or("Expected base url")?;
    if base.as_str() != "http://127.0.0.1:9000/api/" {
        return Err(format!("Unexpected base url: {}", base));
    }
    if args.request_timeout != Some(Duration::from_secs(5)) {
        return Err("Unexpected timeout".to_owned());
    }
    if args.network_timeout != Some(Duration::from_millis(250)) {
        return Err("Unexpected network timeout".to_owned());
    }
    if args.concurrent_requests.map(PositiveUsize::get) != Some(3) {
        return Err("Unexpected concurrency".to_owned());
    }
    if !args.strict || !args.require_login {
        return Err("Expected strict and require-login".to_owned());
    }
    Ok(())
}

#[test]
fn rejects_zero_concurrency_and_bad_durations() -> Result<(), String> {
    for bad in [
        vec!["--concurrent-requests", "0"],
        vec!["--timeout", "0s"],
        vec!["--network-timeout", "soon"],
        vec!["--base-url", "ftp://example.com"],
    ] {
        if parse(&bad).is_ok() {
            return Err(format!("Expected {:?} to be rejected", bad));
        }
    }
    Ok(())
}

#[test]
fn duration_units() -> Result<(), String> {
    let cases = [
        ("1500ms", Duration::from_millis(1500)),
        ("2", Duration::from_secs(2)),
        ("2s", Duration::from_secs(2)),
        ("3m", Duration::from_secs(180)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input).map_err(|err| err.to_string())?;
        if parsed != expected {
            return Err(format!("{} parsed as {:?}", input, parsed));
        }
    }
    Ok(())
}

#[test]
fn duration_errors_are_typed() -> Result<(), String> {
    if !matches!(parse_duration_arg(""), Err(ValidationError::DurationEmpty)) {
        return Err("Expected DurationEmpty".to_owned());
    }
    if !matches!(
        parse_duration_arg("5d"),
        Err(ValidationError::InvalidDurationUnit { .. })
    ) {
        return Err("Expected InvalidDurationUnit".to_owned());
    }
    if !matches!(
        parse_duration_arg(&format!("{}h", u64::MAX)),
        Err(ValidationError::DurationOverflow)
    ) {
        return Err("Expected DurationOverflow".to_owned());
    }
    Ok(())
}

#[test]
fn positive_usize_rejects_zero() -> Result<(), String> {
    if !matches!(parse_positive_usize("0"), Err(ValidationError::InvalidZero)) {
        return Err("Expected InvalidZero".to_owned());
    }
    let value = parse_positive_usize(" 12 ").map_err(|err| err.to_string())?;
    if value.get() != 12 {
        return Err("Unexpected value".to_owned());
    }
    Ok(())
}

#[test]
fn base_url_keeps_path_prefix() -> Result<(), String> {
    let url = parse_base_url("https://example.com/v1").map_err(|err| err.to_string())?;
    let joined = url
        .join("contacts")
        .map_err(|err| format!("join failed: {}", err))?;
    if joined.as_str() != "https://example.com/v1/contacts" {
        return Err(format!("Unexpected join: {}", joined));
    }
    Ok(())
}

#[test]
fn default_concurrency_is_ten() -> Result<(), String> {
    if DEFAULT_CONCURRENT_REQUESTS.get() != 10 {
        return Err(format!(
            "Unexpected default concurrency: {}",
            DEFAULT_CONCURRENT_REQUESTS.get()
        ));
    }
    Ok(())
}
