use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_PREFIX: &str = "!";
const DEFAULT_DATA_FILE: &str = "data/giveaways.json";
const DEFAULT_LIVENESS_PORT: u16 = 3000;

/// Which giveaway store backend to use.
///
/// The backend is an explicit configuration choice (`GIVEAWAY_STORE`), never
/// inferred from which other environment variables happen to be present.
#[derive(Clone, Debug)]
pub enum StoreConfig {
    /// SeaORM-backed database store. Requires `DATABASE_URL`.
    Database { url: String },
    /// Flat JSON file store, one file holding every pending record.
    File { path: PathBuf },
}

pub struct Config {
    pub discord_token: String,
    pub store: StoreConfig,

    /// Default channel giveaways are announced in. When unset, the channel the
    /// command was issued from is used instead.
    pub giveaway_channel_id: Option<u64>,
    /// Role ids whose holders may start giveaways.
    pub staff_role_ids: Vec<u64>,

    pub command_prefix: String,
    pub liveness_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let store = match std::env::var("GIVEAWAY_STORE").as_deref() {
            Ok("database") => StoreConfig::Database {
                url: std::env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            },
            Ok("file") | Err(_) => StoreConfig::File {
                path: std::env::var("GIVEAWAY_DATA_FILE")
                    .unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string())
                    .into(),
            },
            Ok(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "GIVEAWAY_STORE".to_string(),
                    other.to_string(),
                )
                .into())
            }
        };

        Ok(Self {
            discord_token: std::env::var("DISCORD_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            store,
            giveaway_channel_id: match std::env::var("GIVEAWAY_CHANNEL_ID") {
                Ok(raw) => Some(raw.parse::<u64>().map_err(|_| {
                    ConfigError::InvalidEnvVar("GIVEAWAY_CHANNEL_ID".to_string(), raw.clone())
                })?),
                Err(_) => None,
            },
            staff_role_ids: parse_id_list(
                "STAFF_ROLE_IDS",
                std::env::var("STAFF_ROLE_IDS").unwrap_or_default(),
            )?,
            command_prefix: std::env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string()),
            liveness_port: match std::env::var("PORT") {
                Ok(raw) => raw.parse::<u16>().map_err(|_| {
                    ConfigError::InvalidEnvVar("PORT".to_string(), raw.clone())
                })?,
                Err(_) => DEFAULT_LIVENESS_PORT,
            },
        })
    }
}

/// Parses a comma-separated list of Discord ids, skipping empty segments.
fn parse_id_list(name: &str, raw: String) -> Result<Vec<u64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar(name.to_string(), s.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests parsing a comma-separated role id list.
    ///
    /// Expected: Ok with all ids parsed, whitespace and empty segments ignored
    #[test]
    fn parses_id_list() {
        let ids = parse_id_list("STAFF_ROLE_IDS", "1, 2,,3".to_string()).unwrap();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    /// Tests that a non-numeric id in the list is rejected.
    ///
    /// Expected: Err(ConfigError::InvalidEnvVar)
    #[test]
    fn rejects_non_numeric_id() {
        let result = parse_id_list("STAFF_ROLE_IDS", "1,abc".to_string());
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
