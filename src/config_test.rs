use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, HostConfig { port: DEFAULT_PORT, site_root: None });
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = HostConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn parses_port_and_site_root() {
    let cfg = HostConfig::from_vars(Some("8081"), Some("/srv/site")).unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn rejects_non_numeric_port() {
    let err = HostConfig::from_vars(Some("http"), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));
    assert_eq!(err.to_string(), "invalid PORT `http`");
}
