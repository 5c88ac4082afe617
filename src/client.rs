use crate::errors::Error;
use crate::message::{self, MSG_SIZE};
use crate::resolver::resolve_for_connecting;
use std::io::{Read, Write};
use std::net::TcpStream;
use std::process;
use tracing::info;

/// Run the client role: connect to the first resolved candidate, send the
/// greeting, print the reply. Returns the reply text. There are no retries;
/// any failure along the way is fatal for the caller to report.
pub fn run_client(host: &str, port: &str) -> Result<String, Error> {
    let endpoints = resolve_for_connecting(host, port)?;
    let endpoint = endpoints.first().copied().ok_or_else(|| {
        Error::Resolution(host.to_string(), "no addresses found".to_string())
    })?;

    let socket = endpoint
        .open_socket()
        .map_err(|e| Error::Socket("creating socket", e))?;
    socket
        .connect(&endpoint.addr.into())
        .map_err(|e| Error::Socket("failed to connect", e))?;
    let mut stream: TcpStream = socket.into();
    info!("Connected to server at {}", endpoint.addr);

    let greeting = message::encode_text(&message::greeting(process::id()));
    stream.write_all(&greeting).map_err(Error::Send)?;

    let mut buf = [0u8; MSG_SIZE + 1];
    let nread = stream
        .read(&mut buf[..MSG_SIZE])
        .map_err(|e| Error::Socket("recv failed", e))?;

    let reply = message::decode_text(&buf[..nread]);
    println!("Received from server: {}", reply);
    Ok(reply)
}
