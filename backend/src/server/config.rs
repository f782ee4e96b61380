//! HTTP server configuration object.

use std::net::SocketAddr;

use complaints::outbound::mail::SmtpNotifier;
use complaints::outbound::persistence::DbPool;

/// Adapters and listener address needed to start the server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) notifier: SmtpNotifier,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool, notifier: SmtpNotifier) -> Self {
        Self {
            bind_addr,
            db_pool,
            notifier,
        }
    }
}
