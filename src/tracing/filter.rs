use tracing::Level;
use tracing::Metadata;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::Filter;
use tracing_subscriber::registry::LookupSpan;

const CRATE_TARGET: &str = "mizan";

// Custom filter for exact debug level matching
pub struct DebugOnlyFilter;

impl<S> Filter<S> for DebugOnlyFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        meta.level() == &Level::DEBUG && meta.target().starts_with(CRATE_TARGET)
    }
}

// Custom filter for error and warn levels
pub struct ErrorWarnFilter;

impl<S> Filter<S> for ErrorWarnFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        (meta.level() == &Level::ERROR || meta.level() == &Level::WARN) && meta.target().starts_with(CRATE_TARGET)
    }
}

// Custom filter for info levels
#[cfg(feature = "dev")]
pub struct InfoOnlyFilter;

#[cfg(feature = "dev")]
impl<S> Filter<S> for InfoOnlyFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        meta.level() == &Level::INFO && meta.target().starts_with(CRATE_TARGET)
    }
}

// Custom filter for error levels
#[cfg(feature = "prod")]
pub struct ErrorOnlyFilter;

#[cfg(feature = "prod")]
impl<S> Filter<S> for ErrorOnlyFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        meta.level() == &Level::ERROR && meta.target().starts_with(CRATE_TARGET)
    }
}
