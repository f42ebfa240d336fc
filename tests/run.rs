use std::path::PathBuf;

use crudder::http::build_http_client;
use crudder::output::Reporter;
use crudder::utils::read_url_list;
use crudder::{Config, RunSummary, Verb, process_urls};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(405))
        .mount(&server)
        .await;
    server
}

fn write_urls(dir: &tempfile::TempDir, lines: &[String]) -> PathBuf {
    let urls_file = dir.path().join("urls.txt");
    std::fs::write(&urls_file, lines.join("\n") + "\n").unwrap();
    urls_file
}

#[tokio::test]
async fn run_mirrors_console_to_output_file() {
    let server = mock_server().await;
    let dir = tempfile::tempdir().unwrap();
    let ok_url = format!("{}/ok", server.uri());
    let urls_file = write_urls(&dir, &[ok_url.clone(), String::new()]);
    let output = dir.path().join("results.txt");

    let config = Config {
        methods: vec![Verb::Get, Verb::Post, Verb::Get],
        urls_file,
        output: Some(output.clone()),
    };
    let urls = read_url_list(&config.urls_file).await.unwrap();
    let client = build_http_client().unwrap();
    let mut reporter = Reporter::new(Vec::new(), config.output.as_deref())
        .await
        .unwrap();

    let summary = process_urls(&client, &config, &urls, &mut reporter).await;
    assert_eq!(summary, RunSummary { requests: 6, failures: 3 });

    let console = String::from_utf8(reporter.console().clone()).unwrap();
    let lines: Vec<&str> = console.lines().collect();
    assert_eq!(lines.len(), 2 * (1 + 3));
    assert_eq!(lines[0], format!("Endpoint: {}", ok_url));
    assert_eq!(lines[1], "GET GET  200");
    assert_eq!(lines[2], "POST POST  405");
    assert_eq!(lines[3], "GET GET  200");
    assert_eq!(lines[4], "Endpoint: ");
    assert!(lines[5..].iter().all(|l| l.starts_with("Failed to make ")));
    assert_eq!(
        lines.iter().filter(|l| l.starts_with("Endpoint: ")).count(),
        urls.len()
    );

    assert_eq!(std::fs::read_to_string(&output).unwrap(), console);
}

#[tokio::test]
async fn second_run_replaces_output_file() {
    let server = mock_server().await;
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("results.txt");
    let client = build_http_client().unwrap();

    for methods in [vec![Verb::Get, Verb::Get], vec![Verb::Post]] {
        let config = Config {
            methods,
            urls_file: write_urls(&dir, &[format!("{}/ok", server.uri())]),
            output: Some(output.clone()),
        };
        let urls = read_url_list(&config.urls_file).await.unwrap();
        let mut reporter = Reporter::new(Vec::new(), config.output.as_deref())
            .await
            .unwrap();
        process_urls(&client, &config, &urls, &mut reporter).await;
    }

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        format!("Endpoint: {}/ok\nPOST POST  405\n", server.uri())
    );
}
