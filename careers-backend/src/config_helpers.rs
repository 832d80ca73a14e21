use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use careers_db::DbConnectionConfig;

/// Build database connection config from application config.
///
/// The configured driver must be the backend this binary was compiled for.
pub fn database_config_from_config(
    cfg: &careers_config::Config,
) -> anyhow::Result<DbConnectionConfig> {
    if cfg.database.driver != careers_db::DRIVER {
        anyhow::bail!(
            "database.driver is '{}' but this build only supports '{}'",
            cfg.database.driver,
            careers_db::DRIVER
        );
    }
    let url = cfg
        .database
        .connection_url()
        .map_err(|e| anyhow::anyhow!("cannot resolve database url: {e}"))?;
    let db_cfg = DbConnectionConfig::new(url).with_max_connections(cfg.database.max_connections);
    db_cfg.validate()?;
    Ok(db_cfg)
}

/// Parse host:port into a SocketAddr, with fallback to 0.0.0.0.
pub fn parse_bind_address(host: &str, port: u16) -> SocketAddr {
    host.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, port))
        .or_else(|_| host.parse::<SocketAddr>())
        .or_else(|_| host.parse::<Ipv6Addr>().map(|ip| SocketAddr::new(IpAddr::V6(ip), port)))
        .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], port)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_parsing() {
        assert_eq!(
            parse_bind_address("127.0.0.1", 6000),
            SocketAddr::from(([127, 0, 0, 1], 6000))
        );
        assert_eq!(
            parse_bind_address("not-an-ip", 8080),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert!(parse_bind_address("::1", 6000).is_ipv6());
    }

    #[test]
    fn default_config_points_at_sqlite_file() {
        let cfg = careers_config::Config::default();
        let db_cfg = database_config_from_config(&cfg).expect("db config");
        assert_eq!(db_cfg.url, "careers.sqlite");
        assert_eq!(db_cfg.max_connections, 10);
    }

    #[test]
    fn driver_must_match_compiled_backend() {
        let mut cfg = careers_config::Config::default();
        cfg.database.driver = if careers_db::DRIVER == "postgres" {
            "mysql".into()
        } else {
            "postgres".into()
        };
        cfg.database.host = Some("db.internal".into());
        cfg.database.database = Some("careers".into());
        cfg.database.username = Some("app".into());
        cfg.database.password = Some("secret".into());
        assert!(careers_config::validate_config(&cfg).is_ok());

        let err = database_config_from_config(&cfg).unwrap_err().to_string();
        assert!(err.contains(careers_db::DRIVER), "{err}");
        assert!(!err.contains("secret"));
    }
}
