use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("shadowscan-cli").chain(args.iter().copied())).unwrap()
}

#[test]
fn health_takes_no_arguments() {
    let cli = parse(&["--base-url", DEFAULT_API_BASE_URL, "health"]);
    assert_eq!(cli.base_url, "http://localhost:3000/api");
    assert!(matches!(cli.command, Command::Health));
}

#[test]
fn login_parses_credentials() {
    let cli = parse(&["--base-url", "http://x.test/api", "login", "--email", "a@b.test", "--password", "pw12345678"]);
    match cli.command {
        Command::Login { email, password } => {
            assert_eq!(email, "a@b.test");
            assert_eq!(password, "pw12345678");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn results_parses_uuid_and_typed_flag() {
    let id = Uuid::new_v4();
    let id_str = id.to_string();
    let cli = parse(&["--base-url", "http://x.test/api", "--token", "tok", "results", id_str.as_str(), "--typed"]);
    assert_eq!(cli.token.as_deref(), Some("tok"));
    match cli.command {
        Command::Results { user_id, typed } => {
            assert_eq!(user_id, id);
            assert!(typed);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn results_rejects_non_uuid() {
    let args = ["shadowscan-cli", "--base-url", "http://x.test/api", "results", "not-a-uuid"];
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn feedback_result_id_is_optional() {
    let cli = parse(&["--base-url", "http://x.test/api", "feedback", "--message", "hi", "--false-positive"]);
    match cli.command {
        Command::Feedback { message, false_positive, result_id } => {
            assert_eq!(message, "hi");
            assert!(false_positive);
            assert!(result_id.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn require_token_rejects_missing_and_empty() {
    assert!(matches!(require_token(None), Err(CliError::MissingToken)));
    assert!(matches!(require_token(Some("")), Err(CliError::MissingToken)));
    assert_eq!(require_token(Some("tok")).unwrap(), "tok");
}

// =============================================================================
// run / failure output
// =============================================================================

fn closed_local_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[tokio::test]
async fn explicit_base_url_wins_over_bad_env_value() {
    let port = closed_local_port();
    let base_url = format!("http://127.0.0.1:{port}/api");
    unsafe { std::env::set_var("SHADOWSCAN_API_BASE_URL", "localhost:3000") };

    let result = run(parse(&["--base-url", base_url.as_str(), "health"])).await;

    unsafe { std::env::remove_var("SHADOWSCAN_API_BASE_URL") };
    match result {
        Err(CliError::Api(err)) => assert!(err.is_network(), "expected network error, got {err:?}"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn invalid_explicit_base_url_is_rejected() {
    let result = run(parse(&["--base-url", "ftp://x.test", "health"])).await;
    assert!(matches!(result, Err(CliError::Api(ApiError::InvalidBaseUrl(_)))));
}

#[tokio::test]
async fn scan_without_token_fails_before_request() {
    let port = closed_local_port();
    let base_url = format!("http://127.0.0.1:{port}/api");
    let result = run(parse(&["--base-url", base_url.as_str(), "scan", "me@example.test"])).await;
    assert!(matches!(result, Err(CliError::MissingToken)));
}

#[test]
fn failure_message_includes_http_status() {
    let err = CliError::Api(ApiError::Http { status: 401, message: "bad credentials".to_owned() });
    assert_eq!(failure_message(&err), "error (HTTP 401): bad credentials");
}

#[test]
fn failure_message_without_status() {
    assert_eq!(
        failure_message(&CliError::MissingToken),
        "error: missing token; pass --token or set SHADOWSCAN_TOKEN"
    );
    let err = CliError::Api(ApiError::InvalidBaseUrl("ftp://x".to_owned()));
    assert_eq!(failure_message(&err), "error: invalid base URL: ftp://x");
}
