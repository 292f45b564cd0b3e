use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub profile: String,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build a config from any variable source; `from_env` passes the process
    /// environment.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let profile = var("PROFILE").unwrap_or_else(|| "default".to_string());

        let database_url = var("DATABASE_URL").unwrap_or_else(|| default_database_url(&profile));

        Self {
            database_url,
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8000),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            profile,
            seed_demo: var("SEED_DEMO").is_some(),
        }
    }

    /// Apply a `--profile` override. An explicit DATABASE_URL is kept.
    pub fn with_profile(mut self, profile: &str, explicit_database_url: bool) -> Self {
        if !explicit_database_url {
            self.database_url = default_database_url(profile);
        }
        self.profile = profile.to_string();
        self
    }
}

fn default_database_url(profile: &str) -> String {
    if profile == "default" {
        "sqlite://author_books.db?mode=rwc".to_string()
    } else {
        format!("sqlite://author_books_{}.db?mode=rwc", profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_vars(vars(&[]));
        assert_eq!(config.database_url, "sqlite://author_books.db?mode=rwc");
        assert_eq!(config.port, 8000);
        assert_eq!(config.profile, "default");
        assert!(config.cors_allowed_origins.is_empty());
        assert!(!config.seed_demo);
    }

    #[test]
    fn profile_selects_database_file() {
        let config = Config::from_vars(vars(&[("PROFILE", "staging")]));
        assert_eq!(
            config.database_url,
            "sqlite://author_books_staging.db?mode=rwc"
        );
    }

    #[test]
    fn explicit_values_win() {
        let config = Config::from_vars(vars(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("PORT", "9100"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("SEED_DEMO", "1"),
        ]));
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.port, 9100);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(config.seed_demo);
    }

    #[test]
    fn unparsable_port_falls_back() {
        let config = Config::from_vars(vars(&[("PORT", "eighty")]));
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn profile_override_keeps_explicit_url() {
        let config = Config::from_vars(vars(&[("DATABASE_URL", "sqlite::memory:")]))
            .with_profile("demo", true);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.profile, "demo");

        let config = Config::from_vars(vars(&[])).with_profile("demo", false);
        assert_eq!(config.database_url, "sqlite://author_books_demo.db?mode=rwc");
    }
}
