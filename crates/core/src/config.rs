use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::{ConfigError, Result};

pub const DEFAULT_PORT: u16 = 8080;

/// URL-shaped identifier of an engine endpoint, already split into parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocator {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub database_path: Vec<String>,
    /// Database path exactly as written, before splitting or decoding.
    pub raw_database: String,
    pub query: BTreeMap<String, String>,
}

impl ResourceLocator {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            username: None,
            database_path: Vec::new(),
            raw_database: String::new(),
            query: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the database path from plain text; segments are not decoded.
    #[must_use]
    pub fn with_database(mut self, database: &str) -> Self {
        self.database_path = if database.is_empty() {
            Vec::new()
        } else {
            database.split('/').map(str::to_string).collect()
        };
        self.raw_database = database.to_string();
        self
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Parses `scheme://[user@]host[:port][/catalog[/schema]][?key=value...]`.
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
            url: raw.to_string(),
            source,
        })?;

        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| ConfigError::MissingHost {
                url: raw.to_string(),
            })?
            .to_string();

        let username = Some(url.username())
            .filter(|username| !username.is_empty())
            .map(percent_decode)
            .transpose()?;

        let database = url.path().strip_prefix('/').unwrap_or(url.path());
        let query = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        Ok(Self {
            host,
            port: url.port().unwrap_or(DEFAULT_PORT),
            username,
            database_path: split_database_path(database)?,
            raw_database: database.to_string(),
            query,
        })
    }
}

/// Driver connection parameters derived from a [`ResourceLocator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectArgs {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub extra: BTreeMap<String, String>,
}

impl ConnectArgs {
    /// Flattens the arguments into the string map a driver is handed.
    #[must_use]
    pub fn to_kwargs(&self) -> BTreeMap<String, String> {
        let mut kwargs = self.extra.clone();
        kwargs.insert("host".to_string(), self.host.clone());
        kwargs.insert("port".to_string(), self.port.to_string());
        if let Some(username) = &self.username {
            kwargs.insert("username".to_string(), username.clone());
        }
        if let Some(catalog) = &self.catalog {
            kwargs.insert("catalog".to_string(), catalog.clone());
        }
        if let Some(schema) = &self.schema {
            kwargs.insert("schema".to_string(), schema.clone());
        }
        kwargs
    }
}

fn split_database_path(database: &str) -> Result<Vec<String>> {
    if database.is_empty() {
        return Ok(Vec::new());
    }
    database.split('/').map(percent_decode).collect()
}

fn percent_decode(raw: &str) -> Result<String> {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|source| ConfigError::InvalidPercentEncoding {
            input: raw.to_string(),
            source,
        })?;
    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::{percent_decode, split_database_path};
    use crate::{ConfigError, Error};

    #[test]
    fn percent_decode_handles_escapes_and_passes_malformed_sequences_through() {
        assert_eq!(percent_decode("etl%40corp").expect("valid escape"), "etl@corp");
        assert_eq!(percent_decode("100%").expect("dangling percent"), "100%");
        assert_eq!(percent_decode("%zz").expect("non-hex escape"), "%zz");
    }

    #[test]
    fn percent_decode_rejects_invalid_utf8() {
        let error = percent_decode("%FF%FE").expect_err("not utf-8");
        assert!(matches!(
            error,
            Error::Config(ConfigError::InvalidPercentEncoding { ref input, .. }) if input == "%FF%FE"
        ));
    }

    #[test]
    fn empty_database_yields_no_segments() {
        assert!(split_database_path("").expect("empty").is_empty());
        assert_eq!(
            split_database_path("hive").expect("one segment"),
            vec!["hive".to_string()]
        );
        assert_eq!(split_database_path("a%2Fb/c").expect("encoded slash"), ["a/b", "c"]);
    }
}
