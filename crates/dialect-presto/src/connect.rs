use dialectql_core::{ConfigError, ConnectArgs, ResourceLocator, Result};

const HOST_KEY: &str = "host";
const PORT_KEY: &str = "port";
const USERNAME_KEY: &str = "username";
const CATALOG_KEY: &str = "catalog";
const SCHEMA_KEY: &str = "schema";

/// Derives driver connection arguments from a locator.
///
/// Query parameters are merged over the locator's own host, port and username
/// (last write wins). The database path is applied afterwards: one segment
/// names the catalog, two name catalog and schema.
pub(crate) fn create_connect_args(locator: &ResourceLocator) -> Result<ConnectArgs> {
    let mut args = ConnectArgs {
        host: locator.host.clone(),
        port: locator.port,
        username: locator.username.clone(),
        catalog: None,
        schema: None,
        extra: Default::default(),
    };

    for (key, value) in &locator.query {
        match key.as_str() {
            HOST_KEY => args.host = value.clone(),
            PORT_KEY => args.port = parse_port(value)?,
            USERNAME_KEY => args.username = Some(value.clone()),
            CATALOG_KEY => args.catalog = Some(value.clone()),
            SCHEMA_KEY => args.schema = Some(value.clone()),
            _ => {
                args.extra.insert(key.clone(), value.clone());
            }
        }
    }

    match locator.database_path.as_slice() {
        [] => {}
        [catalog] => args.catalog = Some(catalog.clone()),
        [catalog, schema] => {
            args.catalog = Some(catalog.clone());
            args.schema = Some(schema.clone());
        }
        _ => {
            return Err(ConfigError::InvalidDatabasePath {
                path: locator.raw_database.clone(),
            }
            .into());
        }
    }

    Ok(args)
}

fn parse_port(value: &str) -> Result<u16> {
    value.trim().parse::<u16>().map_err(|_| {
        ConfigError::InvalidPort {
            value: value.to_string(),
        }
        .into()
    })
}
