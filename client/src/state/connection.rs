/// Lifecycle of one push connection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; socket is closed or waiting out the reconnect delay.
    #[default]
    Disconnected,
    /// WebSocket handshake is in progress.
    Connecting,
    /// WebSocket is open.
    Connected,
}

impl ConnectionStatus {
    #[must_use]
    pub fn is_connected(self) -> bool {
        self == Self::Connected
    }
}
