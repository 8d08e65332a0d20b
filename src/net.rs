use std::{
    io,
    net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket},
};

use tracing::debug;

/// Returned by [`local_ip_address`] when no outbound route can be found.
pub const UNKNOWN_ADDRESS: &str = "Unable to determine IP";

const PROBE_TARGET: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 80);

/// The local address the OS would use to reach the public internet.
pub fn local_ip_address() -> String {
    local_ip_address_via(PROBE_TARGET)
}

/// Like [`local_ip_address`] but routes toward `target`.
///
/// Connecting a UDP socket only selects a route; no datagram is sent, so the
/// target does not need to be reachable.
pub fn local_ip_address_via(target: SocketAddr) -> String {
    match probe(target) {
        Ok(ip) => ip.to_string(),
        Err(e) => {
            debug!(target = %target, error = %e, "Local address probe failed");
            UNKNOWN_ADDRESS.to_owned()
        }
    }
}

fn probe(target: SocketAddr) -> io::Result<IpAddr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
    socket.connect(target)?;
    Ok(socket.local_addr()?.ip())
}

#[cfg(test)]
mod tests {
    use std::net::Ipv6Addr;

    use super::*;

    #[test]
    fn loopback_target_reports_loopback_address() {
        let target = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 80);
        let ip: IpAddr = local_ip_address_via(target).parse().unwrap();
        assert!(ip.is_loopback());
    }

    #[test]
    fn unroutable_target_reports_sentinel() {
        // An IPv4 socket cannot connect to an IPv6 destination.
        let target = SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 80);
        assert_eq!(local_ip_address_via(target), UNKNOWN_ADDRESS);
    }
}
