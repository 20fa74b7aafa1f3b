pub const DEFAULT_API_BASE_URL: &str = "http://localhost:9000";
pub const DEFAULT_GEOCODE_URL: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";

/// Endpoints the client talks to.
///
/// The server reads `CITIES_API_URL` / `GEOCODE_URL` at runtime (after `.env` is loaded);
/// the browser bundle bakes them in at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub geocode_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            geocode_url: DEFAULT_GEOCODE_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            lookup("CITIES_API_URL", option_env!("CITIES_API_URL")),
            lookup("GEOCODE_URL", option_env!("GEOCODE_URL")),
        )
    }

    fn from_values(api_base_url: Option<String>, geocode_url: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: normalize(api_base_url).unwrap_or(defaults.api_base_url),
            geocode_url: normalize(geocode_url).unwrap_or(defaults.geocode_url),
        }
    }
}

#[cfg(feature = "ssr")]
fn lookup(key: &str, baked: Option<&'static str>) -> Option<String> {
    std::env::var(key).ok().or_else(|| baked.map(str::to_string))
}

#[cfg(not(feature = "ssr"))]
fn lookup(_key: &str, baked: Option<&'static str>) -> Option<String> {
    baked.map(str::to_string)
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(None, Some("   ".to_string()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = AppConfig::from_values(Some("http://api.test:9000/".to_string()), None);
        assert_eq!(config.api_base_url, "http://api.test:9000");
        assert_eq!(config.geocode_url, DEFAULT_GEOCODE_URL);
    }
}
