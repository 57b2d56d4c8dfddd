use clap::Parser;
use mc_cli::cli::{self, Cli, Command};
use mc_domain::config::Config;
use mc_domain::FieldName;

#[test]
fn classify_plain_text() {
    let out = cli::field::classify_value(&Config::default(), FieldName::Minute, "0/15", false).unwrap();
    assert_eq!(out, "Minute: interval (every 15 minute(s) from 0)\ncanonical: */15");
}

#[test]
fn classify_json() {
    let out = cli::field::classify_value(&Config::default(), FieldName::DayOfWeek, "MON-FRI", true).unwrap();
    assert_eq!(out, r#"{"mode":"raw","raw":"MON-FRI"}"#);
}

#[test]
fn encode_from_json() {
    let config = Config::default();
    let out = cli::field::encode_mode(
        &config,
        FieldName::DayOfMonth,
        r#"{"mode":"interval","start":1,"step":7}"#,
    )
    .unwrap();
    assert_eq!(out, "*/7");
    assert!(cli::field::encode_mode(&config, FieldName::Minute, "{not json").is_err());
}

#[test]
fn explain_lists_every_field() {
    let out = cli::expr::explain(&Config::default(), "*/5 9-17 * * MON-FRI").unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Minute"));
    assert!(lines[0].contains("interval"));
    assert!(lines[4].contains("raw"));
    assert!(lines.iter().all(|l| l.ends_with("[ok]")));
}

#[test]
fn explain_flags_out_of_range_field() {
    let out = cli::expr::explain(&Config::default(), "0 25 * * *").unwrap();
    assert!(out.contains("[invalid: Hour: value 25 out of range 0..=23]"));
}

#[test]
fn validate_reports_first_bad_field() {
    let config = Config::default();
    assert_eq!(
        cli::expr::validate(&config, "0 3 * * *").unwrap(),
        "OK: 0 3 * * *"
    );
    let err = cli::expr::validate(&config, "0 3 * 13 *").unwrap_err();
    assert_eq!(err.to_string(), "Month: value 13 out of range 1..=12");
    assert!(cli::expr::validate(&config, "0 3 *").is_err());
}

#[test]
fn next_uses_explicit_start_and_timezone() {
    let times = cli::expr::next(
        &Config::default(),
        "0 9 * * *",
        Some(2),
        Some("Asia/Tokyo"),
        Some("2024-06-15T00:00:00Z"),
    )
    .unwrap();
    assert_eq!(times.len(), 2);
    assert!(times[0].starts_with("2024-06-16T00:00:00+00:00"));
    assert!(times[1].starts_with("2024-06-17T00:00:00+00:00"));
}

#[test]
fn next_rejects_unknown_timezone() {
    let err = cli::expr::next(&Config::default(), "* * * * *", None, Some("Mars/Base"), None).unwrap_err();
    assert!(err.to_string().contains("Mars/Base"));
}

#[test]
fn next_defaults_to_config_count() {
    let mut config = Config::default();
    config.schedule.preview_count = 3;
    let times = cli::expr::next(&config, "* * * * *", None, None, Some("2024-01-01T00:00:00Z")).unwrap();
    assert_eq!(times.len(), 3);
}

#[test]
fn config_show_round_trips() {
    let config = Config::from_toml_str("[fields.hour]\nlabel = \"Stunde\"\n").unwrap();
    let shown = cli::config::show(&config).unwrap();
    let back = Config::from_toml_str(&shown).unwrap();
    assert_eq!(back.field(FieldName::Hour).label, "Stunde");
    assert_eq!(back.schedule.timezone, "UTC");
}

#[test]
fn load_config_from_missing_path_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let config = cli::load_config_from(path.to_str().unwrap()).unwrap();
    assert_eq!(config.schedule.preview_count, 5);
}

#[test]
fn load_config_from_bad_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mccron.toml");
    std::fs::write(&path, "[schedule\n").unwrap();
    let err = cli::load_config_from(path.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("mccron.toml"));
}

#[test]
fn cli_parses_hyphen_values_and_field_names() {
    let cli = Cli::try_parse_from(["mccron", "classify", "-5", "--field", "dow"]).unwrap();
    match cli.command {
        Command::Classify { value, field, json } => {
            assert_eq!(value, "-5");
            assert_eq!(field, FieldName::DayOfWeek);
            assert!(!json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    assert!(Cli::try_parse_from(["mccron", "classify", "5", "--field", "fortnight"]).is_err());
}

#[test]
fn next_rejects_counts_outside_the_preview_range() {
    let config = Config::default();
    let after = Some("2024-01-01T00:00:00Z");
    for count in [0, 101, usize::MAX] {
        let err = cli::expr::next(&config, "* * * * *", Some(count), None, after).unwrap_err();
        assert!(err.to_string().contains("--count"), "{count}: {err}");
    }
    let times = cli::expr::next(&config, "* * * * *", Some(100), None, after).unwrap();
    assert_eq!(times.len(), 100);
}

#[test]
fn validate_checks_bounds_of_raw_fields() {
    let config = Config::default();
    let err = cli::expr::validate(&config, "1-99/2 * * * *").unwrap_err();
    assert_eq!(err.to_string(), "Minute: range 1-99 out of bounds 0..=59");
    let err = cli::expr::validate(&config, "0 0 * * 1,9-12/1").unwrap_err();
    assert_eq!(err.to_string(), "Day of week: range 9-12 out of bounds 0..=6");
}

#[test]
fn build_uses_configured_layout_and_canonical_text() {
    let config = Config::default();
    let assignments = vec!["minute=0/15".to_owned(), "dow=MON-FRI".to_owned()];
    assert_eq!(
        cli::expr::build(&config, &assignments, false).unwrap(),
        "*/15 * * * MON-FRI"
    );

    let seconds = Config::from_toml_str("[schedule]\nlayout = \"with_seconds\"\n").unwrap();
    assert_eq!(cli::expr::build(&seconds, &[], false).unwrap(), "* * * * * *");
    assert_eq!(
        cli::expr::build(&config, &["second=30".to_owned()], true).unwrap(),
        "30 * * * * *"
    );
}

#[test]
fn build_rejects_bad_assignments() {
    let config = Config::default();
    let err = cli::expr::build(&config, &["second=5".to_owned()], false).unwrap_err();
    assert!(err.to_string().contains("not a field"), "{err}");
    let err = cli::expr::build(&config, &["hour=25".to_owned()], false).unwrap_err();
    assert_eq!(err.to_string(), "Hour: value 25 out of range 0..=23");
    assert!(cli::expr::build(&config, &["minute".to_owned()], false).is_err());
    assert!(cli::expr::build(&config, &["minute=1 2".to_owned()], false).is_err());
}

#[test]
fn config_report_counts_errors_and_warnings() {
    let config = Config::from_toml_str(
        "[schedule]\ntimezone = \"Mars/Base\"\npreview_count = 0\n",
    )
    .unwrap();
    let report = cli::config::check(&config, "mccron.toml");
    assert!(report.has_errors());
    assert_eq!((report.errors(), report.warnings()), (1, 1));
    let rendered = report.render();
    assert!(rendered.contains("[ERROR] schedule.timezone"));
    assert!(rendered.ends_with("mccron.toml: 1 error(s), 1 warning(s)\n"));

    let clean = cli::config::check(&Config::default(), "mccron.toml");
    assert!(!clean.has_errors());
    assert_eq!(clean.render(), "mccron.toml: ok\n");
}

#[test]
fn cli_parses_repeated_set_flags() {
    let cli = Cli::try_parse_from(["mccron", "new", "--set", "minute=*/5", "--set", "hour=9-17", "--seconds"])
        .unwrap();
    match cli.command {
        Command::New { set, seconds } => {
            assert_eq!(set, vec!["minute=*/5", "hour=9-17"]);
            assert!(seconds);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
