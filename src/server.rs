use crate::errors::Error;
use crate::message::{self, MSG_SIZE};
use crate::resolver::{resolve_for_listening, Endpoint};
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::process;
use tracing::{error, info};

const LISTEN_BACKLOG: i32 = 10;

// Function to bind the first usable endpoint and start listening. The
// reuse-address option is set before binding so a restarted server can
// rebind immediately.
fn bind_listener(endpoints: &[Endpoint]) -> Result<TcpListener, Error> {
    let endpoint = endpoints.first().ok_or_else(|| {
        Error::Resolution(
            "wildcard address".to_string(),
            "no addresses found".to_string(),
        )
    })?;

    let socket = endpoint
        .open_socket()
        .map_err(|e| Error::Socket("creating socket", e))?;
    socket
        .set_reuse_address(true)
        .map_err(|e| Error::Socket("setsockopt failed", e))?;
    socket
        .bind(&endpoint.addr.into())
        .map_err(|e| Error::Socket("bind failed", e))?;
    socket
        .listen(LISTEN_BACKLOG)
        .map_err(|e| Error::Socket("listen failed", e))?;

    Ok(socket.into())
}

// Function to service one accepted connection: read, print, reply. Returns
// the received text so the caller can see what was served.
fn serve_connection(mut stream: TcpStream) -> Result<String, Error> {
    let mut buf = [0u8; MSG_SIZE + 1];
    let nread = stream
        .read(&mut buf[..MSG_SIZE])
        .map_err(|e| Error::Socket("recv failed", e))?;

    let text = message::decode_text(&buf[..nread]);
    println!("Received from client: {}", text);

    let reply = message::encode_text(&message::reply(process::id()));
    stream.write_all(&reply).map_err(Error::Send)?;
    Ok(text)
}

/// Run the server role: bind, report the actual port, then accept and serve
/// one connection at a time, forever. Only returns on a fatal error.
pub fn run_server(port: &str) -> Result<(), Error> {
    let endpoints = resolve_for_listening(port)?;
    let listener = bind_listener(&endpoints)?;
    let local = listener
        .local_addr()
        .map_err(|e| Error::Socket("getsockname failed", e))?;

    println!("Server listening on port {}", local.port());
    info!("Waiting for connections on {}", local);

    loop {
        let (stream, peer) = listener
            .accept()
            .map_err(|e| Error::Socket("failed to accept", e))?;
        info!("Accepted connection from {}", peer);

        // Read and write failures on an accepted connection are handled
        // symmetrically: log and keep accepting.
        if let Err(e) = serve_connection(stream) {
            error!("Error serving client {}: {}", peer, e);
        }
    }
}
