use clap::Parser;
use reduxrc::cli::{Cli, Command};

#[test]
fn parses_get() {
    let cli = Cli::try_parse_from(["reduxrc", "get", "test"]).expect("cli parse should work");
    match cli.command {
        Command::Get(get) => assert_eq!(get.key, "test"),
        _ => panic!("expected get command"),
    }
}

#[test]
fn parses_set_with_globals() {
    let cli = Cli::try_parse_from([
        "reduxrc",
        "set",
        "sourceBase",
        "app",
        "--base-path",
        "/tmp/project",
        "--template",
        "starter.json",
        "--json",
        "-vv",
    ])
    .expect("cli parse should work");

    assert_eq!(cli.base_path.as_deref(), Some(std::path::Path::new("/tmp/project")));
    assert_eq!(cli.template, "starter.json");
    assert!(cli.json);
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Command::Set(set) => {
            assert_eq!(set.key, "sourceBase");
            assert_eq!(set.value, "app");
        }
        _ => panic!("expected set command"),
    }
}

#[test]
fn template_defaults_to_dotfile_name() {
    let cli = Cli::try_parse_from(["reduxrc", "list"]).expect("cli parse should work");
    assert_eq!(cli.template, ".reduxrc");
    assert!(matches!(cli.command, Command::List));
}

#[test]
fn parses_replace_and_unset() {
    let cli = Cli::try_parse_from(["reduxrc", "replace", r#"{"a":1}"#])
        .expect("cli parse should work");
    match cli.command {
        Command::Replace(replace) => assert_eq!(replace.settings, r#"{"a":1}"#),
        _ => panic!("expected replace command"),
    }

    let cli = Cli::try_parse_from(["reduxrc", "unset", "a"]).expect("cli parse should work");
    match cli.command {
        Command::Unset(unset) => assert_eq!(unset.key, "a"),
        _ => panic!("expected unset command"),
    }
}

#[test]
fn rejects_set_without_value() {
    assert!(Cli::try_parse_from(["reduxrc", "set", "only-key"]).is_err());
}
