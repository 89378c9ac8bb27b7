//! A canned HTTP/1.1 responder standing in for the vendor lookup service.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use ouilookup_common::error::NeighborTableError;
use ouilookup_common::network::neighbor::NeighborEntry;
use ouilookup_common::system::NeighborTable;

pub const API_PATH: &str = "/v2/macs";

#[derive(Clone)]
pub enum Reply {
    Json(u16, &'static str),
    /// Closes the connection without answering.
    Hangup,
}

pub struct VendorStub {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl VendorStub {
    /// Serves `routes` keyed by the full request path. Unknown paths get `404 {}`.
    pub async fn start(routes: Vec<(String, Reply)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes: Arc<HashMap<String, Reply>> = Arc::new(routes.into_iter().collect());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = requests.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = routes.clone();
                let log = log.clone();
                tokio::spawn(async move {
                    let _ = serve(stream, &routes, &log).await;
                });
            }
        });

        Self { addr, requests }
    }

    pub fn api_url(&self) -> String {
        format!("http://{}{}", self.addr, API_PATH)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn serve(
    mut stream: TcpStream,
    routes: &HashMap<String, Reply>,
    log: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let request = String::from_utf8_lossy(&buf);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_default()
        .to_string();
    log.lock().unwrap().push(path.clone());

    let (status, body) = match routes.get(&path) {
        Some(Reply::Json(status, body)) => (*status, *body),
        Some(Reply::Hangup) => return Ok(()),
        None => (404, "{}"),
    };

    let response = format!(
        "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        reason(status),
        body.len()
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

pub fn mac_path(mac: &str) -> String {
    format!("{API_PATH}/{mac}")
}

/// Neighbor table with fixed contents.
pub struct StaticTable(pub Vec<NeighborEntry>);

impl NeighborTable for StaticTable {
    fn read_neighbor_table(&self) -> Result<Vec<NeighborEntry>, NeighborTableError> {
        Ok(self.0.clone())
    }
}

/// Neighbor table whose command always exits non-zero.
pub struct FailingTable;

impl NeighborTable for FailingTable {
    fn read_neighbor_table(&self) -> Result<Vec<NeighborEntry>, NeighborTableError> {
        Err(NeighborTableError::CommandFailed {
            command: "arp -a".to_string(),
            exit_code: Some(1),
            output: "arp: cannot open /proc/net/arp".to_string(),
        })
    }
}
