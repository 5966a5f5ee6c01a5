//! End-to-end tests that launch the `sample-app` binary.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::process::{Child, Command};

const BIN: &str = env!("CARGO_BIN_EXE_sample-app");

fn command() -> Command {
    let mut cmd = Command::new(BIN);
    cmd.env_remove("ENV")
        .env_remove("HOST")
        .env_remove("PORT")
        .env("RUST_LOG", "warn")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true);
    cmd
}

fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

async fn connect_with_retry(port: u16, child: &mut Child) -> TcpStream {
    for _ in 0..100 {
        if let Ok(stream) = TcpStream::connect(("127.0.0.1", port)).await {
            return stream;
        }
        if let Some(status) = child.try_wait().unwrap() {
            panic!("server exited before accepting connections: {status}");
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("server did not accept connections on port {port}");
}

async fn http_get(stream: &mut TcpStream, path: &str) -> String {
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();
    raw
}

fn response_json(raw: &str) -> serde_json::Value {
    let (_, body) = raw.split_once("\r\n\r\n").unwrap();
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
async fn test_invalid_port_exits_non_zero() {
    let status = tokio::time::timeout(
        Duration::from_secs(10),
        command().env("PORT", "abc").status(),
    )
    .await
    .expect("binary did not exit on invalid PORT")
    .unwrap();

    assert!(!status.success());
}

#[tokio::test]
async fn test_bind_conflict_exits_non_zero() {
    let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = occupied.local_addr().unwrap().port();

    let status = tokio::time::timeout(
        Duration::from_secs(10),
        command()
            .env("HOST", "127.0.0.1")
            .env("PORT", port.to_string())
            .status(),
    )
    .await
    .expect("binary did not exit on bind conflict")
    .unwrap();

    assert!(!status.success());
}

#[tokio::test]
async fn test_binary_serves_on_configured_port() {
    let port = free_port();
    let mut child = command()
        .env("HOST", "127.0.0.1")
        .env("PORT", port.to_string())
        .spawn()
        .unwrap();

    let mut stream = connect_with_retry(port, &mut child).await;
    let raw = http_get(&mut stream, "/").await;

    assert!(raw.starts_with("HTTP/1.1 200"));
    let json = response_json(&raw);
    assert_eq!(json["environment"], "development");
    assert_eq!(json["version"], "1.0.0");

    child.kill().await.unwrap();
}

#[tokio::test]
async fn test_binary_reports_env_variable() {
    let port = free_port();
    let mut child = command()
        .env("HOST", "127.0.0.1")
        .env("PORT", port.to_string())
        .env("ENV", "staging")
        .spawn()
        .unwrap();

    let mut stream = connect_with_retry(port, &mut child).await;
    let raw = http_get(&mut stream, "/").await;

    assert_eq!(response_json(&raw)["environment"], "staging");

    child.kill().await.unwrap();
}
