pub mod config;
pub mod error;
pub mod subscription;
pub mod telemetry;
