use super::*;

#[test]
fn defaults_bind_all_interfaces_on_the_fixture_port() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");
    assert_eq!(settings.server.addr.port(), 9696);
    assert!(settings.server.addr.ip().is_unspecified());
    assert_eq!(settings.fixture.profile, SizeProfile::Medium);
    assert_eq!(settings.logging.level, LevelFilter::INFO);
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(4000);
    raw.fixture.data_size = Some("small".to_string());

    let overrides = ServeOverrides {
        server_port: Some(4321),
        fixture: FixtureOverride {
            data_size: Some("large".to_string()),
        },
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.server.addr.port(), 4321);
    assert_eq!(settings.fixture.profile, SizeProfile::Large);
}

#[test]
fn unknown_data_size_is_rejected() {
    let mut raw = RawSettings::default();
    raw.fixture.data_size = Some("gigantic".to_string());

    let err = Settings::from_raw(raw).unwrap_err();
    match err {
        LoadError::Invalid { key, reason } => {
            assert_eq!(key, "fixture.data_size");
            assert!(reason.contains("gigantic"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn data_size_is_normalized_before_parsing() {
    let mut raw = RawSettings::default();
    raw.fixture.data_size = Some(" Large ".to_string());

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.fixture.profile, SizeProfile::Large);
}

#[test]
fn zero_port_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(0);

    assert!(matches!(
        Settings::from_raw(raw),
        Err(LoadError::Invalid {
            key: "server.port",
            ..
        })
    ));
}

#[test]
fn unparseable_host_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.host = Some("not a host".to_string());

    match Settings::from_raw(raw).unwrap_err() {
        LoadError::Invalid { key, reason } => {
            assert_eq!(key, "server.addr");
            assert!(reason.contains("not a host:9696"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn host_and_port_resolve_to_a_socket_addr() {
    let mut raw = RawSettings::default();
    raw.server.host = Some("127.0.0.1".to_string());
    raw.server.port = Some(8080);

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.server.addr.to_string(), "127.0.0.1:8080");
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = ServeOverrides {
        log_json: Some(true),
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn default_to_serve_command() {
    let args = CliArgs::parse_from(["confluence-fixture"]);
    let command = args
        .command
        .unwrap_or(Command::Serve(Box::<ServeArgs>::default()));
    assert!(matches!(command, Command::Serve(_)));
}

#[test]
fn parse_serve_overrides() {
    let args = CliArgs::parse_from([
        "confluence-fixture",
        "serve",
        "--server-host",
        "127.0.0.1",
        "--server-port",
        "8080",
        "--data-size",
        "small",
    ]);

    match args.command.expect("serve command") {
        Command::Serve(serve) => {
            assert_eq!(serve.overrides.server_host.as_deref(), Some("127.0.0.1"));
            assert_eq!(serve.overrides.server_port, Some(8080));
            assert_eq!(serve.overrides.fixture.data_size.as_deref(), Some("small"));
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parse_num_docs_arguments() {
    let args = CliArgs::parse_from(["confluence-fixture", "num-docs", "--data-size", "large"]);

    match args.command.expect("num-docs command") {
        Command::NumDocs(num_docs) => {
            assert_eq!(num_docs.fixture.data_size.as_deref(), Some("large"));
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
#[serial_test::serial]
fn bare_data_size_env_is_honored() {
    // SAFETY: guarded by #[serial]; no other thread touches the environment.
    unsafe { std::env::set_var(DATA_SIZE_ENV, "large") };
    let args = CliArgs::parse_from(["confluence-fixture"]);
    let settings = load(&args).expect("valid settings");
    unsafe { std::env::remove_var(DATA_SIZE_ENV) };

    assert_eq!(settings.fixture.profile, SizeProfile::Large);
}
