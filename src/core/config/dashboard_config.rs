use std::collections::{HashMap, HashSet};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use super::chart_style::{ChartStyle, MarkerStyle};
use crate::domain::metric::series_builder::{excluded_set, DEFAULT_EXCLUDED_FIELDS};

pub const DEFAULT_WHITEBOX_HOST: &str = "http://localhost:8000";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8050";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL of the monitoring backend.
    pub whitebox_host: String,
    pub whitebox_api_key: Option<String>,
    pub bind_addr: String,
    /// Daily-rolling log files go here when set.
    pub log_dir: Option<PathBuf>,
    /// Field names the series builder never turns into a series.
    pub excluded_fields: HashSet<String>,
    pub chart_style: ChartStyle,
    pub debug_mode: bool,
    pub debug_model_id: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            whitebox_host: DEFAULT_WHITEBOX_HOST.into(),
            whitebox_api_key: None,
            bind_addr: DEFAULT_BIND_ADDR.into(),
            log_dir: None,
            excluded_fields: excluded_set(DEFAULT_EXCLUDED_FIELDS),
            chart_style: ChartStyle::default(),
            debug_mode: false,
            debug_model_id: None,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env::vars().collect())
    }

    /// Builds the config from an explicit variable map. Invalid values are
    /// logged and replaced by their defaults.
    pub fn from_vars(vars: HashMap<String, String>) -> Self {
        let get = |key: &str| {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut cfg = Self::default();

        if let Some(host) = get("WHITEBOX_HOST") {
            cfg.whitebox_host = host.trim_end_matches('/').to_string();
        }
        cfg.whitebox_api_key = get("WHITEBOX_API_KEY");
        if let Some(addr) = get("WHITEBOX_DASHBOARD_ADDR") {
            cfg.bind_addr = addr;
        }
        cfg.log_dir = get("WHITEBOX_LOG_DIR").map(PathBuf::from);

        if let Some(fields) = get("WHITEBOX_EXCLUDED_FIELDS") {
            cfg.excluded_fields = fields
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect();
        }

        let style = &mut cfg.chart_style;
        style.chart_width = parse_or(
            "WHITEBOX_CHART_WIDTH",
            get("WHITEBOX_CHART_WIDTH"),
            style.chart_width,
        );
        style.chart_height = parse_or(
            "WHITEBOX_CHART_HEIGHT",
            get("WHITEBOX_CHART_HEIGHT"),
            style.chart_height,
        );
        style.line_width =
            parse_or("WHITEBOX_LINE_WIDTH", get("WHITEBOX_LINE_WIDTH"), style.line_width);

        if let Some(code) = get("WHITEBOX_MARKER_STYLE") {
            match MarkerStyle::from_code(&code) {
                Some(m) => style.marker_style = m,
                None => warn!(
                    "Invalid WHITEBOX_MARKER_STYLE {:?}, keeping {}",
                    code,
                    style.marker_style.as_code()
                ),
            }
        }

        cfg.debug_mode = get("WHITEBOX_DEBUG_MODE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);
        cfg.debug_model_id = get("WHITEBOX_DEBUG_MODEL_ID");

        cfg
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Debug,
{
    match raw {
        Some(v) => v.parse().unwrap_or_else(|_| {
            // Soft validation: log but never fail
            warn!("Invalid {} value {:?}, using {:?}", key, v, default);
            default
        }),
        None => default,
    }
}
