use crate::utils::error::{PlacesError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://places.googleapis.com/v1";
pub const DEFAULT_SETTINGS_FILE: &str = "settings.toml";
pub const SETTINGS_TEMPLATE_FILE: &str = "settings.example.toml";

/// Places API (New) 單頁上限
pub const MAX_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub google_places: GooglePlacesConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GooglePlacesConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
    pub region_code: Option<String>,
    pub language_code: Option<String>,
    pub included_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_results: usize,
    pub page_size: usize,
    pub max_pages: usize,
    pub page_delay_ms: u64,
    pub max_variations: usize,
    pub variation_max_pages: usize,
    pub variation_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub results_folder: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for GooglePlacesConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            request_timeout_seconds: default_timeout(),
            region_code: None,
            language_code: None,
            included_type: None,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 150,
            page_size: MAX_PAGE_SIZE,
            max_pages: 8,
            page_delay_ms: 2000,
            max_variations: 6,
            variation_max_pages: 3,
            variation_delay_ms: 1000,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_folder: "results".to_string(),
        }
    }
}

impl Settings {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PlacesError::ConfigError {
                    message: format!(
                        "{} not found (copy {} and insert your API key)",
                        path.display(),
                        SETTINGS_TEMPLATE_FILE
                    ),
                }
            } else {
                PlacesError::IoError(e)
            }
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PlacesError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GOOGLE_PLACES_API_KEY})，找不到就保留原字串
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn api_key(&self) -> &str {
        self.google_places.api_key.trim()
    }

    pub fn search_url(&self) -> String {
        format!("{}/places:searchText", self.base_url())
    }

    pub fn place_url(&self, place_id: &str) -> String {
        format!("{}/places/{}", self.base_url(), place_id)
    }

    pub fn results_folder(&self) -> &str {
        &self.output.results_folder
    }

    fn base_url(&self) -> &str {
        self.google_places.base_url.trim_end_matches('/')
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        // 金鑰優先檢查，沒有金鑰就不可能送出任何請求
        validation::validate_api_key("google_places.api_key", &self.google_places.api_key)?;
        validation::validate_url("google_places.base_url", &self.google_places.base_url)?;
        validation::validate_range(
            "google_places.request_timeout_seconds",
            self.google_places.request_timeout_seconds,
            1,
            300,
        )?;

        for (field, value) in [
            ("google_places.region_code", &self.google_places.region_code),
            ("google_places.language_code", &self.google_places.language_code),
            ("google_places.included_type", &self.google_places.included_type),
        ] {
            if let Some(value) = value {
                validation::validate_non_empty_string(field, value)?;
            }
        }

        let search = &self.search;
        validation::validate_range("search.page_size", search.page_size, 1, MAX_PAGE_SIZE)?;
        validation::validate_range("search.max_results", search.max_results, 1, 1000)?;
        validation::validate_range("search.max_pages", search.max_pages, 1, 50)?;
        validation::validate_range("search.max_variations", search.max_variations, 1, 20)?;
        validation::validate_range(
            "search.variation_max_pages",
            search.variation_max_pages,
            1,
            50,
        )?;

        validation::validate_path("output.results_folder", &self.output.results_folder)?;

        Ok(())
    }
}
