// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the service.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::Result;
use std::time::Duration;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used. This macro is appropriate for non-critical
/// tuning parameters where fallback behavior is acceptable.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails with an error whose
/// message mentions the offending environment variable.
macro_rules! assert_invalid_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string().contains($key),
            "unexpected error: {err}"
        );
    }};
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
/// All configuration is validated eagerly during initialization.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: server::ServerConfig,
    pub metrics: telemetry::MetricsConfig,
    pub catalog: catalog::CatalogConfig,
    pub sampler: sampler::SamplerConfig,
}

impl AppConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid, most notably
    /// an empty message catalog. This function is intended to be called
    /// exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            server: server::ServerConfig::from_env()?,
            metrics: telemetry::MetricsConfig::from_env(),
            catalog: catalog::CatalogConfig::from_env()?,
            sampler: sampler::SamplerConfig::from_env(),
        })
    }
}

// ============================================================
// HTTP server configuration
// ============================================================

mod server {
    // ---
    use super::*;
    use std::net::SocketAddr;

    const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

    /// HTTP listener configuration.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        /// Address the HTTP server binds to. Defaults to 127.0.0.1:8080.
        pub bind_addr: SocketAddr,
    }

    impl ServerConfig {
        /// Builds a [`ServerConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if `MESSAGE_BIND_ADDR` is set but is not a valid
        /// socket address.
        pub fn from_env() -> Result<Self> {
            // ---
            let raw = std::env::var("MESSAGE_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

            let bind_addr = raw.parse().map_err(|err| {
                anyhow::anyhow!("Invalid configuration MESSAGE_BIND_ADDR={raw}: {err}")
            })?;

            Ok(Self { bind_addr })
        }
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            }
        }
    }
}
pub use server::ServerConfig;

// ============================================================
// Metrics configuration
// ============================================================

mod telemetry {
    // ---
    use std::str::FromStr;

    /// Metrics backend selected at startup.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum MetricsBackend {
        /// Prometheus text exposition on `/metrics`.
        #[default]
        Prometheus,
        /// Process-local atomics, rendered as `name value` lines.
        Memory,
        /// Discards every observation.
        Noop,
    }

    impl FromStr for MetricsBackend {
        type Err = anyhow::Error;

        fn from_str(value: &str) -> anyhow::Result<Self> {
            match value.trim().to_ascii_lowercase().as_str() {
                "prom" | "prometheus" => Ok(Self::Prometheus),
                "memory" | "mem" => Ok(Self::Memory),
                "noop" | "none" => Ok(Self::Noop),
                other => Err(anyhow::anyhow!("Unknown metrics backend: {other}")),
            }
        }
    }

    /// Metrics-related configuration.
    #[derive(Debug, Clone, Default)]
    pub struct MetricsConfig {
        /// Backend implementation. Defaults to Prometheus; unknown values
        /// fall back to the default.
        pub backend: MetricsBackend,
    }

    impl MetricsConfig {
        /// Builds a [`MetricsConfig`] from environment variables.
        pub fn from_env() -> Self {
            // ---
            let backend = optional_env_parse!(
                "MESSAGE_METRICS_TYPE",
                MetricsBackend,
                MetricsBackend::default()
            );

            Self { backend }
        }
    }
}
pub use telemetry::{MetricsBackend, MetricsConfig};

// ============================================================
// Message catalog configuration
// ============================================================

mod catalog {
    // ---
    use super::*;
    use crate::domain::MessageCatalog;

    /// Separator between messages in `MESSAGE_CATALOG`.
    pub const CATALOG_SEPARATOR: char = '|';

    /// Message catalog configuration.
    #[derive(Debug, Clone, Default)]
    pub struct CatalogConfig {
        /// Messages served by `GET /message`. Defaults to the built-in catalog.
        pub catalog: MessageCatalog,
    }

    impl CatalogConfig {
        /// Builds a [`CatalogConfig`] from environment variables.
        ///
        /// `MESSAGE_CATALOG` holds `|`-separated messages. Blank entries are
        /// dropped after trimming.
        ///
        /// # Errors
        /// Returns an error if `MESSAGE_CATALOG` is set but contains no
        /// non-blank message.
        pub fn from_env() -> Result<Self> {
            // ---
            let Ok(raw) = std::env::var("MESSAGE_CATALOG") else {
                return Ok(Self::default());
            };

            let messages = raw
                .split(CATALOG_SEPARATOR)
                .map(str::trim)
                .filter(|m| !m.is_empty());

            let catalog = MessageCatalog::new(messages)
                .map_err(|err| anyhow::anyhow!("Invalid configuration MESSAGE_CATALOG: {err}"))?;

            Ok(Self { catalog })
        }
    }
}
pub use catalog::CatalogConfig;

// ============================================================
// Periodic sampler configuration
// ============================================================

mod sampler {
    // ---
    use super::*;

    /// Configuration for the simulated long-running job.
    #[derive(Debug, Clone)]
    pub struct SamplerConfig {
        /// Whether the job is started at all. Defaults to true.
        pub enabled: bool,

        /// Delay between the end of one run and the start of the next.
        /// Defaults to 3000 ms.
        pub fixed_delay: Duration,

        /// Exclusive upper bound on the simulated work duration.
        /// Defaults to 7000 ms.
        pub max_jitter: Duration,
    }

    impl SamplerConfig {
        /// Builds a [`SamplerConfig`] from environment variables.
        pub fn from_env() -> Self {
            // ---
            let defaults = Self::default();

            let enabled = optional_env_parse!("MESSAGE_SAMPLER_ENABLED", bool, defaults.enabled);
            let delay_ms = optional_env_parse!(
                "MESSAGE_SAMPLER_DELAY_MS",
                u64,
                defaults.fixed_delay.as_millis() as u64
            );
            let jitter_ms = optional_env_parse!(
                "MESSAGE_SAMPLER_MAX_JITTER_MS",
                u64,
                defaults.max_jitter.as_millis() as u64
            );

            Self {
                enabled,
                fixed_delay: Duration::from_millis(delay_ms),
                max_jitter: Duration::from_millis(jitter_ms),
            }
        }
    }

    impl Default for SamplerConfig {
        fn default() -> Self {
            Self {
                enabled: true,
                fixed_delay: Duration::from_millis(3_000),
                max_jitter: crate::domain::DEFAULT_MAX_JITTER,
            }
        }
    }
}
pub use sampler::SamplerConfig;

// ============================================================
// Tests
// ============================================================
