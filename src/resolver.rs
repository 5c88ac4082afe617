use crate::errors::Error;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, ToSocketAddrs};

/// A resolved, concrete address plus the parameters needed to open a
/// matching TCP socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub addr: SocketAddr,
}

impl Endpoint {
    /// Open an unbound stream socket matching this endpoint's address family.
    pub fn open_socket(&self) -> io::Result<Socket> {
        Socket::new(
            Domain::for_address(self.addr),
            Type::STREAM,
            Some(Protocol::TCP),
        )
    }
}

// Function to resolve the listening side: IPv4 wildcard on the given port
pub fn resolve_for_listening(port: &str) -> Result<Vec<Endpoint>, Error> {
    let port = parse_port(port)?;
    Ok(vec![Endpoint {
        addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
    }])
}

// Function to resolve connect candidates of any address family
pub fn resolve_for_connecting(host: &str, port: &str) -> Result<Vec<Endpoint>, Error> {
    let port = parse_port(port)?;

    // An IP literal needs no name resolution.
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(vec![Endpoint {
            addr: SocketAddr::new(ip, port),
        }]);
    }

    let endpoints: Vec<Endpoint> = (host, port)
        .to_socket_addrs()
        .map_err(|e| Error::Resolution(host.to_string(), e.to_string()))?
        .map(|addr| Endpoint { addr })
        .collect();

    if endpoints.is_empty() {
        return Err(Error::Resolution(
            host.to_string(),
            "no addresses found".to_string(),
        ));
    }
    Ok(endpoints)
}

fn parse_port(port: &str) -> Result<u16, Error> {
    port.parse::<u16>()
        .map_err(|e| Error::Resolution(format!("port '{}'", port), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listening_endpoint_is_ipv4_wildcard() {
        let endpoints = resolve_for_listening("0").unwrap();
        assert_eq!(endpoints.len(), 1);
        assert_eq!(
            endpoints[0].addr,
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        );
    }

    #[test]
    fn test_listening_keeps_the_requested_port() {
        let endpoints = resolve_for_listening("8080").unwrap();
        assert_eq!(endpoints[0].addr.port(), 8080);
    }

    #[test]
    fn test_invalid_port_is_a_resolution_error() {
        assert!(matches!(
            resolve_for_listening("not-a-port"),
            Err(Error::Resolution(..))
        ));
        assert!(matches!(
            resolve_for_listening("70000"),
            Err(Error::Resolution(..))
        ));
        assert!(matches!(
            resolve_for_connecting("localhost", "-1"),
            Err(Error::Resolution(..))
        ));
    }

    #[test]
    fn test_ip_literal_skips_name_resolution() {
        let endpoints = resolve_for_connecting("127.0.0.1", "4242").unwrap();
        assert_eq!(
            endpoints,
            vec![Endpoint {
                addr: "127.0.0.1:4242".parse().unwrap()
            }]
        );
    }

    #[test]
    fn test_ipv6_literal_resolves_to_ipv6_endpoint() {
        let endpoints = resolve_for_connecting("::1", "4242").unwrap();
        assert!(endpoints[0].addr.is_ipv6());
    }

    #[test]
    fn test_unresolvable_host_is_a_resolution_error() {
        let result = resolve_for_connecting("this-host-does-not-exist.invalid", "4242");
        assert!(matches!(result, Err(Error::Resolution(..))));
    }
}
