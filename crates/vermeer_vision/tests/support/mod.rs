//! Socket-level HTTP fixtures for exercising the client and downloader
//! against real connections.

use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve exactly one connection with a canned HTTP response, then close.
pub async fn serve_once(response: Vec<u8>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_request(&mut stream).await;
        stream.write_all(&response).await.unwrap();
        stream.shutdown().await.ok();
    });
    addr
}

/// Accept one connection and never answer; the client must time out.
pub async fn serve_stalled() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_request(&mut stream).await;
        tokio::time::sleep(std::time::Duration::from_secs(600)).await;
    });
    addr
}

/// Build a response with the given status line, content type, and body.
pub fn http_response(status: &str, content_type: &str, body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        content_type,
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

/// Read one full request (headers plus any declared body) before replying,
/// so clients never see a reset while still writing.
async fn read_request(stream: &mut tokio::net::TcpStream) {
    let mut buf = vec![0u8; 65536];
    let mut seen: Vec<u8> = Vec::new();
    let mut needed: Option<usize> = None;
    loop {
        if let Some(total) = needed {
            if seen.len() >= total {
                break;
            }
        }
        let n = stream.read(&mut buf).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        seen.extend_from_slice(&buf[..n]);
        if needed.is_none() {
            if let Some(header_end) = seen.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&seen[..header_end]).to_lowercase();
                let body_len = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                needed = Some(header_end + 4 + body_len);
            }
        }
    }
}
