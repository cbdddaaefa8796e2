pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod handler;
pub mod model;
pub mod pipeline;
pub mod tracing;
pub mod utils;

pub use engine::*;
pub use error::*;

pub use crate::tracing::setup_tracing;
pub use crate::tracing::TracingGuard;

pub use error::Result;
