//! Document-store handle (MongoDB).
//!
//! The datastore is connected and pinged at startup but no endpoint reads or
//! writes it. Routes are registered eagerly; instead of gating registration
//! on the connect step, the handle records connect success in a readiness
//! flag that any future datastore-backed handler can check. A failed connect
//! is logged and never prevents the HTTP listener from starting.

use std::sync::atomic::{AtomicBool, Ordering};

use mongodb::bson::doc;
use mongodb::Client;

/// Shared, read-only-after-startup handle to the document store.
pub struct DatastoreHandle {
    client: Option<Client>,
    ready: AtomicBool,
}

impl DatastoreHandle {
    /// A handle with no configured datastore.
    pub fn disconnected() -> Self {
        DatastoreHandle {
            client: None,
            ready: AtomicBool::new(false),
        }
    }

    /// Connects and pings the datastore; failures are logged, not fatal.
    pub async fn connect(uri: &str) -> Self {
        let client = match Client::with_uri_str(uri).await {
            Ok(client) => client,
            Err(err) => {
                tracing::error!("Failed to connect to MongoDB: {}", err);
                return Self::disconnected();
            }
        };

        let ready = match client.database("admin").run_command(doc! { "ping": 1 }).await {
            Ok(_) => {
                tracing::info!("MongoDB connection established");
                true
            }
            Err(err) => {
                tracing::error!("Failed to connect to MongoDB: {}", err);
                false
            }
        };

        DatastoreHandle {
            client: Some(client),
            ready: AtomicBool::new(ready),
        }
    }

    /// Whether the startup ping succeeded.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }

    /// The underlying driver client, when one was configured.
    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disconnected_handle_is_not_ready() {
        let handle = DatastoreHandle::disconnected();
        assert!(!handle.is_ready());
        assert!(handle.client().is_none());
    }
}
