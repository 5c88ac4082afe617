use std::io;
use thiserror::Error;

/// Everything that can go wrong in either role. All of these are fatal for
/// the process except read/write failures on a connection the server has
/// already accepted, which the accept loop logs and survives.
#[derive(Error, Debug)]
pub enum Error {
    #[error("wrong number of arguments")]
    Usage,

    #[error("cannot resolve {0}: {1}")]
    Resolution(String, String),

    #[error("{0}: {1}")]
    Socket(&'static str, #[source] io::Error),

    #[error("send failed: {0}")]
    Send(#[source] io::Error),
}
