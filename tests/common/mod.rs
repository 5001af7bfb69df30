#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// Minimal HTTP/1.1 stub of the Modpack Index API.
///
/// Every request target is recorded before the response is sent, and the
/// connection is closed after each response.
pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// `handler` maps a request target (path and query) to a status and body.
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&str) -> (u16, String) + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/api/v1", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                loop {
                    let mut header = String::new();
                    match reader.read_line(&mut header) {
                        Ok(0) | Err(_) => break,
                        Ok(_) if header == "\r\n" || header == "\n" => break,
                        Ok(_) => {}
                    }
                }

                let target = request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or_default()
                    .to_string();
                recorded.lock().unwrap().push(target.clone());

                let (status, body) = handler(&target);
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    if status == 200 { "OK" } else { "Error" },
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self { base_url, requests }
    }

    /// Serves `page_sizes[n - 1]` generated modpacks for page `n`, then empty pages.
    pub fn with_page_sizes(page_sizes: Vec<usize>) -> Self {
        Self::start(move |target| {
            let page = page_param(target).unwrap_or(1);
            let size = page_sizes.get(page as usize - 1).copied().unwrap_or(0);
            (200, page_body(page, size))
        })
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn page_param(target: &str) -> Option<u32> {
    target
        .split_once('?')?
        .1
        .split('&')
        .find_map(|pair| pair.strip_prefix("page="))
        .and_then(|page| page.parse().ok())
}

pub fn page_body(page: u32, size: usize) -> String {
    let data: Vec<serde_json::Value> = (0..size)
        .map(|i| {
            serde_json::json!({
                "id": page as usize * 1000 + i,
                "name": format!("Pack {}-{}", page, i),
                "download_count": i,
                "url": format!("https://www.modpackindex.com/modpack/{}", page as usize * 1000 + i),
            })
        })
        .collect();
    serde_json::json!({ "data": data, "meta": { "current_page": page } }).to_string()
}
