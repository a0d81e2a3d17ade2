//! Start-up configuration from `ORTHO_*` environment variables.

use std::env;
use std::net::SocketAddr;

use ortho_export::styles::DocumentStyles;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    /// Styling of the `/summary` document.
    pub summary_styles: DocumentStyles,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_format: LogFormat::Pretty,
            summary_styles: DocumentStyles::default(),
        }
    }
}

impl ApiConfig {
    /// Read the process environment. Also returns one message per variable
    /// that was set but unusable; logging is not up yet at this point.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(raw) = lookup("ORTHO_BIND_ADDR") {
            match raw.trim().parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(_) => warnings.push(format!(
                    "ORTHO_BIND_ADDR={raw:?} is not a socket address, using {DEFAULT_BIND_ADDR}"
                )),
            }
        }

        if let Some(raw) = lookup("ORTHO_LOG_FORMAT") {
            match raw.trim().to_ascii_lowercase().as_str() {
                "json" => config.log_format = LogFormat::Json,
                "pretty" => config.log_format = LogFormat::Pretty,
                _ => warnings.push(format!(
                    "ORTHO_LOG_FORMAT={raw:?} is not json or pretty, using pretty"
                )),
            }
        }

        if let Some(raw) = lookup("ORTHO_SUMMARY_SKIP_EMPTY") {
            match parse_bool(&raw) {
                Some(skip) => config.summary_styles.skip_empty = skip,
                None => warnings.push(format!(
                    "ORTHO_SUMMARY_SKIP_EMPTY={raw:?} is not a boolean, using true"
                )),
            }
        }

        if let Some(raw) = lookup("ORTHO_BODY_FONT") {
            let font = raw.trim();
            if font.is_empty() {
                warnings.push("ORTHO_BODY_FONT is empty, using Calibri".to_string());
            } else {
                config.summary_styles.body_font = font.to_string();
            }
        }

        (config, warnings)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
