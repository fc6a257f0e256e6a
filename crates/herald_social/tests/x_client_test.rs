//! Tests for the X API client against a local one-shot HTTP server.

use herald_error::{DistributionErrorKind, HeraldErrorKind};
use herald_social::{Distributor, OAuthCredentials, OAuthSigner, XClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Accept one connection, reply with `status` and `body`, return the raw request.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/2/tweets", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);

            let text = String::from_utf8_lossy(&request).to_string();
            if let Some(split) = text.find("\r\n\r\n") {
                let length = text[..split]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if request.len() >= split + 4 + length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).to_string()
    });

    (url, handle)
}

fn client(url: &str) -> XClient {
    XClient::new(
        OAuthSigner::new(OAuthCredentials::new("ck", "cs", "tk", "ts")),
        url,
    )
}

#[tokio::test]
async fn test_successful_post_returns_id() {
    let (url, server) = serve_once("201 Created", r#"{"data":{"id":"1744","text":"hi"}}"#).await;

    let id = client(&url).post("🎯 1100회 분석").await.unwrap();
    assert_eq!(id, "1744");

    let request = server.await.unwrap();
    let lower = request.to_lowercase();
    assert!(request.starts_with("POST /2/tweets"));
    assert!(lower.contains("authorization: oauth oauth_consumer_key=\"ck\""));
    assert!(lower.contains("content-type: application/json"));
    assert!(request.contains(r#"{"text":"🎯 1100회 분석"}"#));
}

#[tokio::test]
async fn test_non_success_status_is_rejected_with_body() {
    let (url, server) = serve_once("403 Forbidden", r#"{"detail":"duplicate content"}"#).await;

    let err = client(&url).post("dup").await.unwrap_err();
    server.await.unwrap();

    match err.kind() {
        HeraldErrorKind::Distribution(e) => {
            assert_eq!(
                e.kind,
                DistributionErrorKind::Rejected {
                    status: 403,
                    body: r#"{"detail":"duplicate content"}"#.to_string()
                }
            );
            assert!(err.to_string().contains("X API error 403"));
        }
        other => panic!("expected distribution error, got {other}"),
    }
}

#[tokio::test]
async fn test_success_without_id_is_an_error() {
    let (url, server) = serve_once("200 OK", r#"{"errors":[{"message":"odd"}]}"#).await;

    let err = client(&url).post("text").await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(
        err.kind(),
        HeraldErrorKind::Distribution(e) if matches!(e.kind, DistributionErrorKind::MissingPostId(_))
    ));
}
