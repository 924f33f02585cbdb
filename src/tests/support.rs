// @file: src/tests/support.rs
// @description: Shared fixtures: chart payloads and a one-shot HTTP server.
// @author: LAS.

use serde_json::{json, Value};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

//
// PAYLOAD FIXTURES
//

pub fn meta(symbol: &str) -> Value {
    json!({
        "currency": "EUR",
        "symbol": symbol,
        "exchangeName": "GER",
        "regularMarketPrice": 27.5,
        "dataGranularity": "5m",
        "range": "1d"
    })
}

pub fn quote(open: Value, high: Value, low: Value, close: Value, volume: Value) -> Value {
    json!({ "open": open, "high": high, "low": low, "close": close, "volume": volume })
}

pub fn chart(results: Vec<Value>) -> Vec<u8> {
    json!({ "chart": { "result": results, "error": null } })
        .to_string()
        .into_bytes()
}

pub fn result(symbol: &str, timestamps: Value, quotes: Vec<Value>) -> Value {
    json!({
        "meta": meta(symbol),
        "timestamp": timestamps,
        "indicators": { "quote": quotes }
    })
}

// One result, one quote block, three five-minute samples.
pub fn sample_chart() -> Vec<u8> {
    chart(vec![result(
        "ZAL.DE",
        json!([1700000000, 1700000300, 1700000600]),
        vec![quote(
            json!([10.0, 10.5, 10.4]),
            json!([10.2, 10.7, 10.6]),
            json!([9.9, 10.3, 10.1]),
            json!([10.1, 10.6, 10.2]),
            json!([0, 100, 50]),
        )],
    )])
}


//
// ONE-SHOT HTTP SERVER
//

// Serves a single canned response, then returns the request head it received.
pub fn serve_once(status_line: &str, body: &[u8]) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base: String = format!("http://{}", listener.local_addr().unwrap());

    let mut response: Vec<u8> = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status_line,
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head: Vec<u8> = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        stream.write_all(&response).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&head).into_owned()
    });

    (base, handle)
}

// An address with nothing listening on it.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
