//! Logger builder implementation

#[macro_use]
mod format;

use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, DisplayConfig, Format};
use crate::error::{LogError, LogResult};

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Logger builder
#[derive(Debug, Clone, Default)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Replaces the filter directives.
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    /// Replaces the output format.
    pub fn format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    /// Replaces the display options.
    pub fn display(mut self, display: DisplayConfig) -> Self {
        self.config.display = display;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses the filter directives without installing anything.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.config.level).map_err(|e| LogError::filter(&self.config.level, e))
    }

    /// Build and install the global subscriber
    ///
    /// Fails if the filter does not parse or a global subscriber is already
    /// set; in both cases nothing is installed.
    pub fn build(self) -> LogResult<()> {
        let filter = self.filter()?;
        let fmt_layer = fmt_layer(self.config.format, &self.config.display);

        Registry::default()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))
    }
}

fn fmt_layer<S>(format: Format, display: &DisplayConfig) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    match format {
        Format::Pretty => create_fmt_layer!(pretty, display),
        Format::Compact => create_fmt_layer!(compact, display),
        Format::Json => create_json_layer!(display),
    }
}
