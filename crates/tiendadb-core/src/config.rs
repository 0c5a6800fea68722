use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in
/// the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful
/// for testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// The parsing/validation logic is decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let log_level = or_default("TIENDADB_LOG_LEVEL", "info");

    let country_prefix = or_default("TIENDADB_COUNTRY_PREFIX", "750");
    if country_prefix.len() != 3 || !country_prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::InvalidEnvVar {
            var: "TIENDADB_COUNTRY_PREFIX".to_string(),
            reason: format!("{country_prefix:?} is not a 3-digit GS1 prefix"),
        });
    }

    let default_currency = or_default("TIENDADB_CURRENCY", "MXN");
    if default_currency.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "TIENDADB_CURRENCY".to_string(),
            reason: "currency code must be non-empty".to_string(),
        });
    }

    let products_path = PathBuf::from(or_default(
        "TIENDADB_PRODUCTS_PATH",
        "./data/grocery-products.json",
    ));

    Ok(AppConfig {
        log_level,
        country_prefix,
        default_currency,
        products_path,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_env_yields_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let config = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.country_prefix, "750");
        assert_eq!(config.default_currency, "MXN");
        assert_eq!(
            config.products_path,
            PathBuf::from("./data/grocery-products.json")
        );
    }

    #[test]
    fn country_prefix_override_is_accepted() {
        let mut map = HashMap::new();
        map.insert("TIENDADB_COUNTRY_PREFIX", "754");
        let config = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(config.country_prefix, "754");
    }

    #[test]
    fn short_country_prefix_is_rejected() {
        let mut map = HashMap::new();
        map.insert("TIENDADB_COUNTRY_PREFIX", "75");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(
                result,
                Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TIENDADB_COUNTRY_PREFIX"
            ),
            "expected InvalidEnvVar, got: {result:?}"
        );
    }

    #[test]
    fn non_digit_country_prefix_is_rejected() {
        let mut map = HashMap::new();
        map.insert("TIENDADB_COUNTRY_PREFIX", "7a0");
        assert!(build_app_config(lookup_from_map(&map)).is_err());
    }

    #[test]
    fn empty_currency_is_rejected() {
        let mut map = HashMap::new();
        map.insert("TIENDADB_CURRENCY", "  ");
        assert!(build_app_config(lookup_from_map(&map)).is_err());
    }

    #[test]
    fn products_path_override_is_used() {
        let mut map = HashMap::new();
        map.insert("TIENDADB_PRODUCTS_PATH", "/srv/catalogs/papeleria.json");
        let config = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            config.products_path,
            PathBuf::from("/srv/catalogs/papeleria.json")
        );
    }
}
