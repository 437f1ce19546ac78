mod common;

use command::plugin::{Plugin, PluginConfig};
use command::report::{FetchStatus, InfoOptions};
use common::RecordingConsole;
use mockito::Matcher;
use std::fs;
use std::path::Path;
use tempdir::TempDir;

const CREDENTIALS: &str = "default:
  token: secret-token
  account: act-1
other:
  token: other-token
  account: act-2
";

fn write_files(dir: &Path, state: &str) -> PluginConfig {
    let credentials_path = dir.join("credentials");
    let functions_state = dir.join("spotinst-functions.yml");
    fs::write(&credentials_path, CREDENTIALS).unwrap();
    fs::write(&functions_state, state).unwrap();

    PluginConfig {
        provider_name: "spotinst".into(),
        service: "plugin-service".into(),
        api_url: mockito::server_url(),
        environment_id: "env-1".into(),
        profile: "default".into(),
        credentials_path,
        functions_state,
        declared_functions: vec![],
    }
}

fn options(function: Option<&str>) -> InfoOptions {
    InfoOptions {
        function: function.map(|f| f.to_string()),
        stage: "dev".into(),
        show_fetch_errors: false,
    }
}

fn function_body(id: &str, name: &str) -> String {
    format!(
        r#"{{"response": {{"items": [{{
            "id": "{}",
            "name": "{}",
            "runtime": "python3.6",
            "limits": {{"memory": 256, "timeout": 60}},
            "latestVersion": 3,
            "url": "https://fx.spotinst.io/{}",
            "createdAt": "2018-06-01T10:00:00.000Z"
        }}], "count": 1}}}}"#,
        id, name, id
    )
}

#[tokio::test]
async fn test_info_hooks_end_to_end() {
    let tmp = TempDir::new("plugin-info").unwrap();
    let config = write_files(
        tmp.path(),
        "hello:\n  name: hello\n  id: fx-plugin-info\n  stage: dev\n",
    );

    let _function = mockito::mock("GET", "/functions/function/fx-plugin-info")
        .match_header("authorization", "Bearer secret-token")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("accountId".into(), "act-1".into()),
            Matcher::UrlEncoded("environmentId".into(), "env-1".into()),
        ]))
        .with_status(200)
        .with_body(function_body("fx-plugin-info", "hello"))
        .create();
    let _patterns = mockito::mock("GET", "/functions/endpoint/pattern")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"response": {"items": [
                {"pattern": "/hello", "method": "POST", "functionId": "fx-plugin-info"},
                {"pattern": "/other", "method": "GET", "functionId": "fx-someone-else"}
            ]}}"#,
        )
        .create();
    let _events = mockito::mock("GET", "/spectrum/events")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("resourceId".into(), "fx-plugin-info".into()),
            Matcher::UrlEncoded("action".into(), "INVOKE_FUNCTION".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"response": {"items": [{"isEnabled": true, "cronExpression": "*/5 * * * *"}]}}"#,
        )
        .create();

    let console = RecordingConsole::default();
    let mut plugin = Plugin::new(config, options(None), &console);

    assert_eq!(plugin.run_hook("before:info:info").await.unwrap(), None);
    let report = plugin.run_hook("info:info").await.unwrap().unwrap();

    assert_eq!(report.service, "plugin-service");
    assert_eq!(report.endpoints, FetchStatus::Fetched);
    assert_eq!(report.crons, FetchStatus::Fetched);
    assert_eq!(report.functions.len(), 1);

    let out = console.output();
    assert!(out.starts_with("Service Information\nservice: plugin-service\nfunctions:\n  hello"));
    assert!(out.contains("    version: 3"));
    assert!(out.contains("    cron:\n      active: true\n      value: */5 * * * *"));
    assert!(out.contains("    endpoint:\n      path: /hello\n      method: POST"));
}

#[tokio::test]
async fn test_logs_hook_prints_identity() {
    let tmp = TempDir::new("plugin-logs").unwrap();
    let config = write_files(
        tmp.path(),
        "worker-prod:\n  name: worker\n  id: fx-plugin-logs\n  stage: prod\n",
    );

    let _function = mockito::mock("GET", "/functions/function/fx-plugin-logs")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(function_body("fx-plugin-logs", "worker"))
        .create();

    let console = RecordingConsole::default();
    let mut opts = options(Some("worker"));
    opts.stage = "prod".into();
    let mut plugin = Plugin::new(config, opts, &console);

    assert_eq!(plugin.run_hook("before:logs:logs").await.unwrap(), None);
    assert_eq!(
        console.output(),
        "Name: worker\nFunction ID: fx-plugin-logs\nCurrent Version: 3"
    );
}

#[tokio::test]
async fn test_endpoint_outage_still_reports() {
    let tmp = TempDir::new("plugin-outage").unwrap();
    let config = write_files(
        tmp.path(),
        "down:\n  name: down\n  id: fx-plugin-outage\n  stage: dev\n",
    );

    let _function = mockito::mock("GET", "/functions/function/fx-plugin-outage")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(function_body("fx-plugin-outage", "down"))
        .create();
    let _events = mockito::mock("GET", "/spectrum/events")
        .match_query(Matcher::UrlEncoded(
            "resourceId".into(),
            "fx-plugin-outage".into(),
        ))
        .with_status(500)
        .with_body("boom")
        .create();

    let console = RecordingConsole::default();
    let mut opts = options(Some("down"));
    opts.show_fetch_errors = true;
    let mut plugin = Plugin::new(config, opts, &console);
    plugin.init().unwrap();

    let report = plugin.info().await.unwrap();
    assert_eq!(report.functions.len(), 1);
    assert!(report.functions[0].cron.is_none());
    assert!(matches!(report.crons, FetchStatus::Failed(_)));
    assert!(console.output().contains("warnings:"));
    assert!(console.output().contains("  cron events unavailable: "));
}

#[tokio::test]
async fn test_info_before_init_fails() {
    let tmp = TempDir::new("plugin-uninit").unwrap();
    let config = write_files(tmp.path(), "");
    let console = RecordingConsole::default();
    let mut plugin = Plugin::new(config, options(None), &console);

    let err = plugin.run_hook("info:info").await.unwrap_err();
    assert!(err.to_string().contains("not initialised"));
    assert!(console.output().is_empty());
}

#[tokio::test]
async fn test_unknown_hook_fails() {
    let tmp = TempDir::new("plugin-unknown").unwrap();
    let config = write_files(tmp.path(), "");
    let console = RecordingConsole::default();
    let mut plugin = Plugin::new(config, options(None), &console);

    let err = plugin.run_hook("before:remove:remove").await.unwrap_err();
    assert_eq!(err.to_string(), "unknown lifecycle hook: before:remove:remove");
}

#[tokio::test]
async fn test_init_with_missing_profile_fails() {
    let tmp = TempDir::new("plugin-profile").unwrap();
    let mut config = write_files(tmp.path(), "");
    config.profile = "missing".into();
    let console = RecordingConsole::default();
    let mut plugin = Plugin::new(config, options(None), &console);

    if std::env::var("SPOTINST_TOKEN").is_err() {
        let err = plugin.init().unwrap_err();
        assert!(err.to_string().contains("profile 'missing' not found"));
    }
}

#[test]
fn test_hooks_are_listed() {
    let events: Vec<&str> = Plugin::<&RecordingConsole>::hooks()
        .iter()
        .map(|(event, _)| *event)
        .collect();
    assert!(events.contains(&"before:logs:logs"));
    assert!(events.contains(&"after:deploy:function:deploy"));
    assert_eq!(events.len(), 7);
}
