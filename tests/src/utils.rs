use std::net::{IpAddr, SocketAddr};

use tokio::net::TcpListener;

/// A listener on an ephemeral port of `addr`. The kernel completes handshakes
/// from its backlog, so nothing has to call `accept`.
pub async fn listen_on(addr: IpAddr) -> Option<(TcpListener, u16)> {
    let listener = TcpListener::bind(SocketAddr::new(addr, 0)).await.ok()?;
    let port = listener.local_addr().ok()?.port();
    Some((listener, port))
}

/// A port on `addr` that was just released and is very likely closed.
pub async fn released_port(addr: IpAddr) -> u16 {
    let (listener, port) = listen_on(addr).await.expect("bind ephemeral port");
    drop(listener);
    port
}
