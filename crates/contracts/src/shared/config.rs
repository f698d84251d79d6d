use serde::Deserialize;

use super::table::PaginationOptions;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub table: TableConfig,
    pub live_updates: LiveUpdatesConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Absolute base URL; when empty the frontend derives it from the
    /// window location and `port`.
    pub base_url: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    pub rows_per_page: usize,
    pub min_rows_per_page: usize,
    pub max_rows_per_page: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LiveUpdatesConfig {
    pub ws_path: String,
    pub poll_interval_ms: u32,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[table]
rows_per_page = 10
min_rows_per_page = 5
max_rows_per_page = 100
page_size_options = [5, 10, 25, 50, 100]

[live_updates]
ws_path = "/ws/orders"
poll_interval_ms = 10000
"#;

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: 3000,
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: 10,
            min_rows_per_page: 5,
            max_rows_per_page: 100,
            page_size_options: vec![5, 10, 25, 50, 100],
        }
    }
}

impl Default for LiveUpdatesConfig {
    fn default() -> Self {
        Self {
            ws_path: "/ws/orders".to_string(),
            poll_interval_ms: 10_000,
        }
    }
}

impl TableConfig {
    pub fn pagination_options(&self) -> PaginationOptions {
        PaginationOptions {
            initial_rows_per_page: self.rows_per_page,
            min_rows_per_page: self.min_rows_per_page,
            max_rows_per_page: self.max_rows_per_page,
        }
        .normalized()
    }

    /// Page size choices limited to the configured bounds.
    pub fn page_size_choices(&self) -> Vec<usize> {
        let options = self.pagination_options();
        let mut choices: Vec<usize> = self
            .page_size_options
            .iter()
            .copied()
            .filter(|n| (options.min_rows_per_page..=options.max_rows_per_page).contains(n))
            .collect();
        if choices.is_empty() {
            choices.push(options.initial_rows_per_page);
        }
        choices
    }
}

/// Load configuration from an optional override document.
///
/// Keys missing from the override keep their defaults; `None` yields the
/// embedded default configuration.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    match override_toml {
        Some(contents) if !contents.trim().is_empty() => Ok(toml::from_str(contents)?),
        _ => Ok(toml::from_str(DEFAULT_CONFIG)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.live_updates.ws_path, "/ws/orders");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = load_config(Some(
            r#"
            [table]
            rows_per_page = 25

            [live_updates]
            poll_interval_ms = 3000
            "#,
        ))
        .unwrap();
        assert_eq!(config.table.rows_per_page, 25);
        assert_eq!(config.table.max_rows_per_page, 100);
        assert_eq!(config.live_updates.poll_interval_ms, 3000);
        assert_eq!(config.live_updates.ws_path, "/ws/orders");
        assert_eq!(config.api.port, 3000);
    }

    #[test]
    fn test_invalid_override_is_error() {
        assert!(load_config(Some("[table]\nrows_per_page = \"many\"")).is_err());
    }

    #[test]
    fn test_pagination_options_are_normalized() {
        let table = TableConfig {
            rows_per_page: 500,
            min_rows_per_page: 5,
            max_rows_per_page: 50,
            page_size_options: vec![1, 10, 50, 200],
        };
        assert_eq!(table.pagination_options().initial_rows_per_page, 50);
        assert_eq!(table.page_size_choices(), vec![10, 50]);
    }
}
