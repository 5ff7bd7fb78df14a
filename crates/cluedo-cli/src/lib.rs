//! Session files, logging setup and board rendering for the assistant binary.

pub mod config;
pub mod logging;
pub mod render;
pub mod session;
