//! TCP server: one [`Session`] per connection.
//!
//! Frames are a 4-byte big-endian length followed by a JSON document. A
//! request frame holds a [`Request`]; the reply frame holds a
//! [`BatchResponse`].

use serde::{Deserialize, Serialize};
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};
use tracing::{error, info, warn};

use crate::response::BatchResponse;
use crate::session::{Headers, Interpreter, Session};
use crate::storage::StorageEngine;

/// Largest accepted frame.
pub const MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024; // 16MB

/// One client request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub headers: Headers,
    #[serde(default)]
    pub body: Option<String>,
}

impl Request {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            headers: Headers::new(),
            body: Some(body.into()),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Read one frame. `Ok(None)` on a clean end of stream.
pub async fn read_frame<R: AsyncRead + Unpin>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut len_buf = [0u8; 4];
    match reader.read_exact(&mut len_buf).await {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e),
    }
    let len = u32::from_be_bytes(len_buf) as usize;
    if len > MAX_MESSAGE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Message too large: {} bytes", len),
        ));
    }

    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf).await?;
    Ok(Some(buf))
}

/// Write one frame.
pub async fn write_frame<W: AsyncWrite + Unpin>(writer: &mut W, data: &[u8]) -> io::Result<()> {
    if data.len() > MAX_MESSAGE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Message too large: {} bytes", data.len()),
        ));
    }
    writer.write_all(&(data.len() as u32).to_be_bytes()).await?;
    writer.write_all(data).await?;
    writer.flush().await
}

/// Accept connections forever.
pub async fn serve<E: StorageEngine>(listener: TcpListener, interpreter: Interpreter<E>) {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                info!("New client connected: {}", addr);
                let session = interpreter.session();
                tokio::spawn(async move {
                    if let Err(e) = handle_client(stream, session).await {
                        warn!("Connection {} closed with error: {}", addr, e);
                    }
                });
            }
            Err(e) => {
                error!("Failed to accept connection: {}", e);
            }
        }
    }
}

async fn handle_client<E: StorageEngine>(
    mut stream: TcpStream,
    mut session: Session<E>,
) -> io::Result<()> {
    while let Some(frame) = read_frame(&mut stream).await? {
        let response = match serde_json::from_slice::<Request>(&frame) {
            Ok(request) => {
                session
                    .handle_request(&request.headers, request.body.as_deref())
                    .await
            }
            Err(e) => {
                error!("Failed to decode request: {}", e);
                BatchResponse::failed(vec![], 0, format!("Invalid request: {}", e))
            }
        };

        let data = serde_json::to_vec(&response)?;
        write_frame(&mut stream, &data).await?;
    }

    info!("Client disconnected");
    Ok(())
}

/// A minimal client for the frame protocol.
pub struct Client {
    stream: TcpStream,
}

impl Client {
    pub async fn connect(addr: impl ToSocketAddrs) -> io::Result<Self> {
        Ok(Self {
            stream: TcpStream::connect(addr).await?,
        })
    }

    /// Send a request and wait for its response.
    pub async fn send(&mut self, request: &Request) -> io::Result<BatchResponse> {
        let data = serde_json::to_vec(request)?;
        self.send_raw(&data).await
    }

    /// Send an already encoded frame body.
    pub async fn send_raw(&mut self, data: &[u8]) -> io::Result<BatchResponse> {
        write_frame(&mut self.stream, data).await?;
        let frame = read_frame(&mut self.stream).await?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "Server closed the connection")
        })?;
        Ok(serde_json::from_slice(&frame)?)
    }
}
