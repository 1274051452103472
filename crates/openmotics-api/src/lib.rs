// openmotics-api: Async Rust client for the OpenMotics home-automation
// API, covering both the local on-premise gateway and the hosted cloud.

pub mod backend;
pub mod cloud;
pub mod error;
pub mod http;
pub mod local;
pub mod transport;

mod client;

pub use backend::{Backend, Scheme};
pub use client::Client;
pub use cloud::{CLOUD_BASE_URL, CloudBackend, OpenMoticsCloud};
pub use error::Error;
pub use http::{Http, ResponseBody};
pub use local::{DEFAULT_PORT, LocalBackend, LocalGateway};
pub use transport::{TlsMode, TransportConfig};
