// Local gateway client modules
//
// Hand-written client for the on-premise gateway's action-style HTTP API.
// Records arrive as flat JSON objects and are fanned out into nested
// structs client-side; see `models`.

pub mod client;
pub mod energy;
pub mod groupactions;
pub mod inputs;
pub mod lights;
pub mod models;
pub mod outputs;
pub mod sensors;
pub mod shutters;
pub mod thermostats;

pub use client::{DEFAULT_PORT, LocalBackend, LocalGateway};
