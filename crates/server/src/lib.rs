pub mod config;
pub mod deployment;
pub mod error;
pub mod file_logging;
pub mod response;
pub mod routes;

pub use deployment::Deployment;
