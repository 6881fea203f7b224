// SPDX-License-Identifier: MPL-2.0
//! Download pipeline against a throwaway local HTTP server.

use futures_util::StreamExt;
use iced_gallery::error::{DecodeError, Error};
use iced_gallery::media::{fetch, fetch_image, parse_url, DecodeTarget, DownloadEvent};
use image_rs::{ImageBuffer, ImageFormat, Rgba};
use std::io::Cursor;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = ImageBuffer::from_pixel(width, height, Rgba([10u8, 20, 30, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    bytes
}

async fn read_request_path(socket: &mut TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buffer.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8_lossy(&buffer)
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string()
}

async fn respond(mut socket: TcpStream, png: Vec<u8>) {
    let path = read_request_path(&mut socket).await;
    let (head, body): (String, Vec<u8>) = match path.as_str() {
        "/image.png" => (
            format!(
                "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                png.len()
            ),
            png,
        ),
        "/unsized.png" => (
            "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nConnection: close\r\n\r\n".to_string(),
            png,
        ),
        "/page.html" => {
            let body = b"<html><body>not an image</body></html>".to_vec();
            (
                format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                ),
                body,
            )
        }
        "/truncated.png" => (
            format!(
                "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                png.len() + 4096
            ),
            png,
        ),
        _ => (
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string(),
            Vec::new(),
        ),
    };
    let _ = socket.write_all(head.as_bytes()).await;
    let _ = socket.write_all(&body).await;
    let _ = socket.shutdown().await;
}

/// Serves a 200x100 PNG under a few paths until the test ends.
async fn serve() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let png = png_bytes(200, 100);
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(respond(socket, png.clone()));
        }
    });
    addr
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client")
}

async fn events_for(addr: SocketAddr, path: &str) -> Vec<DownloadEvent> {
    let url = parse_url(&format!("http://{addr}{path}")).expect("url");
    fetch(client(), url, DecodeTarget::Full).collect().await
}

fn split(events: Vec<DownloadEvent>) -> (Vec<(u64, Option<u64>)>, Vec<DownloadEvent>) {
    let mut progress = Vec::new();
    let mut completed = Vec::new();
    for event in events {
        match event {
            DownloadEvent::Progress(p) => progress.push((p.bytes_received, p.total_bytes)),
            other => completed.push(other),
        }
    }
    (progress, completed)
}

#[tokio::test]
async fn known_length_reports_ratio_and_decodes() {
    let addr = serve().await;
    let expected_len = png_bytes(200, 100).len() as u64;

    let (progress, completed) = split(events_for(addr, "/image.png").await);

    assert_eq!(progress.first(), Some(&(0, Some(expected_len))));
    assert_eq!(progress.last(), Some(&(expected_len, Some(expected_len))));
    assert!(progress.windows(2).all(|w| w[0].0 <= w[1].0));

    assert_eq!(completed.len(), 1);
    match &completed[0] {
        DownloadEvent::Completed(Ok(image)) => assert_eq!((image.width, image.height), (200, 100)),
        other => panic!("expected a decoded image, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_length_still_completes() {
    let addr = serve().await;

    let (progress, completed) = split(events_for(addr, "/unsized.png").await);

    assert!(!progress.is_empty());
    assert!(progress.iter().all(|(_, total)| total.is_none()));
    assert!(matches!(
        completed.as_slice(),
        [DownloadEvent::Completed(Ok(_))]
    ));
}

#[tokio::test]
async fn non_image_body_is_a_decode_error() {
    let addr = serve().await;

    let (_, completed) = split(events_for(addr, "/page.html").await);

    assert!(matches!(
        completed.as_slice(),
        [DownloadEvent::Completed(Err(Error::Decode(DecodeError::NotAnImage(_))))]
    ));
}

#[tokio::test]
async fn http_error_status_is_a_transfer_error() {
    let addr = serve().await;

    let events = events_for(addr, "/missing.png").await;

    assert_eq!(events.len(), 1);
    match &events[0] {
        DownloadEvent::Completed(Err(Error::Transfer(message))) => {
            assert!(message.contains("404"));
        }
        other => panic!("expected a transfer error, got {other:?}"),
    }
}

#[tokio::test]
async fn body_cut_short_is_a_read_error() {
    let addr = serve().await;

    let (_, completed) = split(events_for(addr, "/truncated.png").await);

    assert!(matches!(
        completed.as_slice(),
        [DownloadEvent::Completed(Err(Error::Read(_)))]
    ));
}

#[tokio::test]
async fn refused_connection_is_a_transfer_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let events = events_for(addr, "/image.png").await;

    assert!(matches!(
        events.as_slice(),
        [DownloadEvent::Completed(Err(Error::Transfer(_)))]
    ));
}

#[tokio::test]
async fn thumbnails_are_downscaled() {
    let addr = serve().await;
    let url = parse_url(&format!("http://{addr}/image.png")).expect("url");

    let image = fetch_image(client(), url, DecodeTarget::Thumbnail(50))
        .await
        .expect("thumbnail");

    assert_eq!((image.width, image.height), (50, 25));
}
