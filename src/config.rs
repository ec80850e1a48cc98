use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Fixed number of questions per page for every listing endpoint.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Optional config file, read from the working directory.
pub const CONFIG_FILE: &str = "trivia.toml";

/// Prefix for environment overrides, e.g. `TRIVIA_DATABASE_URL`.
pub const ENV_PREFIX: &str = "TRIVIA_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub max_connections: u32,
    /// Insert the standard categories on startup (idempotent).
    pub seed_categories: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:trivia.sqlite".to_string(),
            listen_addr: "0.0.0.0:5000".to_string(),
            loglevel: "info".to_string(),
            max_connections: 5,
            seed_categories: true,
        }
    }
}

impl Config {
    /// Layering: defaults < `trivia.toml` < `TRIVIA_*` env.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| panic!("FATAL: invalid configuration: {e}"))
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_sources() {
        let cfg: Config = Figment::from(Serialized::defaults(Config::default()))
            .extract()
            .expect("defaults must extract");
        assert_eq!(cfg.database_url, "sqlite:trivia.sqlite");
        assert_eq!(cfg.max_connections, 5);
        assert!(cfg.seed_categories);
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TRIVIA_LISTEN_ADDR", "127.0.0.1:9000");
            jail.set_env("TRIVIA_SEED_CATEGORIES", "false");
            let cfg = Config::load()?;
            assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
            assert!(!cfg.seed_categories);
            Ok(())
        });
    }

    #[test]
    fn toml_file_is_layered_under_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                loglevel = "debug"
                max_connections = 2
                "#,
            )?;
            jail.set_env("TRIVIA_MAX_CONNECTIONS", "8");
            let cfg = Config::load()?;
            assert_eq!(cfg.loglevel, "debug");
            assert_eq!(cfg.max_connections, 8);
            Ok(())
        });
    }
}
