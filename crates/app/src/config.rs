//! Runtime configuration: which mutation strategy backs the session.

use std::env;
use std::sync::Arc;

use telinv_products::Product;
use telinv_store::{LocalGateway, MutationGateway, RemoteGateway};
use telinv_suppliers::Supplier;

use crate::orders::{LocalOrderGateway, OrderGateway, RemoteOrderGateway};

const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Which strategy backs the domain stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    /// In-memory collections, session-local.
    Local,
    /// REST calls against the inventory API.
    Remote,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub mode: StoreMode,
    pub api_url: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `TELINV_MODE` selects `local` (default) or `remote`;
    /// `TELINV_API_URL` overrides the API base for remote mode.
    pub fn from_env() -> Self {
        let mode = match env::var("TELINV_MODE").as_deref() {
            Ok("remote") => StoreMode::Remote,
            Ok("local") | Err(_) => StoreMode::Local,
            Ok(other) => {
                tracing::warn!("unknown TELINV_MODE {other:?}; falling back to local");
                StoreMode::Local
            }
        };

        let api_url = env::var("TELINV_API_URL").unwrap_or_else(|_| {
            if mode == StoreMode::Remote {
                tracing::warn!("TELINV_API_URL not set; using {DEFAULT_API_URL}");
            }
            DEFAULT_API_URL.to_string()
        });

        Self { mode, api_url }
    }

    pub fn product_gateway(&self) -> Arc<dyn MutationGateway<Product>> {
        match self.mode {
            StoreMode::Local => Arc::new(LocalGateway::new()),
            StoreMode::Remote => Arc::new(RemoteGateway::new(self.api_url.clone())),
        }
    }

    pub fn supplier_gateway(&self) -> Arc<dyn MutationGateway<Supplier>> {
        match self.mode {
            StoreMode::Local => Arc::new(LocalGateway::new()),
            StoreMode::Remote => Arc::new(RemoteGateway::new(self.api_url.clone())),
        }
    }

    pub fn order_gateway(&self) -> Arc<dyn OrderGateway> {
        match self.mode {
            StoreMode::Local => Arc::new(LocalOrderGateway::new()),
            StoreMode::Remote => Arc::new(RemoteOrderGateway::new(self.api_url.clone())),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: StoreMode::Local,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}
