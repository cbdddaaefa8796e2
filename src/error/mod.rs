pub mod config;
pub mod pipeline;
pub mod render;

pub use anyhow::anyhow;
pub use anyhow::Context;
pub use anyhow::Error;
pub use anyhow::Result;
pub use config::ConfigError;
pub use pipeline::InputField;
pub use pipeline::PipelineError;
pub use pipeline::PipelineResult;
pub use render::RenderError;

// For consistent error handling with location info
#[macro_export]
macro_rules! err_with_loc {
    ($err:expr) => {
        anyhow::anyhow!($err).context(format!("at {}:{}", file!(), line!()))
    };
}
