mod client;
mod errors;
mod message;
mod resolver;
mod server;

use errors::Error;
use std::env;
use std::process;
use tracing::error;
use tracing_subscriber;

/// The role selected on the command line.
#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Server { port: String },
    Client { host: String, port: String },
}

// Role dispatch is arity-only: no extra arguments means a server on an
// ephemeral port, one means a server on that port, two means a client.
fn parse_mode(args: &[String]) -> Result<Mode, Error> {
    match args {
        [] => Ok(Mode::Server {
            port: "0".to_string(),
        }),
        [port] => Ok(Mode::Server { port: port.clone() }),
        [host, port] => Ok(Mode::Client {
            host: host.clone(),
            port: port.clone(),
        }),
        _ => Err(Error::Usage),
    }
}

fn usage(prog: &str) {
    eprintln!("Usage: {} <hostname> <port>   (client)", prog);
    eprintln!("       {} [ port ]            (server)", prog);
}

fn main() {
    // Initialize the tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = env::args().collect();

    let mode = match parse_mode(&args[1..]) {
        Ok(mode) => mode,
        Err(_) => {
            usage(&args[0]);
            process::exit(1);
        }
    };

    let result = match mode {
        Mode::Server { port } => server::run_server(&port),
        Mode::Client { host, port } => client::run_client(&host, &port).map(|_| ()),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        process::exit(1);
    }
}
