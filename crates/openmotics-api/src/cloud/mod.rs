// Cloud client modules
//
// Hand-written client for the hosted multi-tenant API. All resource
// paths are scoped by the selected installation; see `client`.

pub mod client;
pub mod energy;
pub mod groupactions;
pub mod inputs;
pub mod installations;
pub mod lights;
pub mod models;
pub mod outputs;
pub mod sensors;
pub mod shutters;
pub mod thermostats;
pub mod ventilations;

pub use client::{CLOUD_BASE_URL, CloudBackend, OpenMoticsCloud};
