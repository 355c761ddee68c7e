use std::env;

use derive_getters::Getters;

const DEFAULT_EXPORT_PATH: &str = "summary.json";

/// Settings read from the environment (and `.env`, when present).
#[derive(Clone, Debug, Getters)]
pub struct Config {
    csv_path: Option<String>,
    export_path: String,
    log_file: Option<String>,
}

impl Config {
    pub fn new(
        csv_path: Option<String>,
        export_path: Option<String>,
        log_file: Option<String>,
    ) -> Self {
        Self {
            csv_path,
            export_path: export_path.unwrap_or_else(|| DEFAULT_EXPORT_PATH.to_string()),
            log_file,
        }
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self::new(
            env::var("PROFIT_CALC_CSV").ok(),
            env::var("PROFIT_CALC_EXPORT").ok(),
            env::var("PROFIT_CALC_LOG").ok(),
        )
    }

    /// Command-line values take precedence over the environment.
    pub fn with_overrides(mut self, csv_path: Option<String>, export_path: Option<String>) -> Self {
        if csv_path.is_some() {
            self.csv_path = csv_path;
        }
        if let Some(export_path) = export_path {
            self.export_path = export_path;
        }
        self
    }
}
