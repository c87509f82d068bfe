//! Command-line and environment configuration.

use clap::{Parser, ValueEnum};

use stockroom_infra::LookupPolicy;
use stockroom_observability::{LogConfig, LogFormat};

/// Which record a search returns when several match.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum LookupArg {
    #[default]
    First,
    /// Legacy behaviour: the last matching record wins.
    Last,
}

impl From<LookupArg> for LookupPolicy {
    fn from(arg: LookupArg) -> Self {
        match arg {
            LookupArg::First => LookupPolicy::FirstMatch,
            LookupArg::Last => LookupPolicy::LastMatch,
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "stockroom", version, about = "Track parts and the products built from them")]
pub struct ConsoleArgs {
    /// Tracing filter directive; `RUST_LOG` takes precedence.
    #[arg(long, env = "STOCKROOM_LOG", default_value = "warn")]
    pub log_filter: String,

    /// Log line format: pretty, compact or json.
    #[arg(long, env = "STOCKROOM_LOG_FORMAT", default_value = "compact")]
    pub log_format: LogFormat,

    #[arg(long, env = "STOCKROOM_LOOKUP", value_enum, default_value_t = LookupArg::First)]
    pub lookup: LookupArg,

    /// Disable colored output. Also honoured through `NO_COLOR`.
    #[arg(long)]
    pub no_color: bool,
}

impl ConsoleArgs {
    pub fn colors_enabled(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none()
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            filter: self.log_filter.clone(),
            format: self.log_format,
            ansi: self.colors_enabled(),
        }
    }

    pub fn lookup_policy(&self) -> LookupPolicy {
        self.lookup.into()
    }
}
