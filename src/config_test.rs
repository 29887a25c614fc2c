use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_env_is_empty() {
    let config = ServerConfig::from_lookup(lookup(&[])).expect("defaults should parse");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert!(config.public_dir.ends_with("public"));
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn explicit_values_override_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("PUBLIC_DIR", "/srv/portfolio"),
    ]))
    .expect("explicit values should parse");
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.public_dir, PathBuf::from("/srv/portfolio"));
}

#[test]
fn blank_public_dir_falls_back_to_default() {
    let config = ServerConfig::from_lookup(lookup(&[("PUBLIC_DIR", "  ")])).expect("blank dir should parse");
    assert!(config.public_dir.ends_with("public"));
}

#[test]
fn invalid_port_names_the_variable() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).expect_err("port should be rejected");
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).expect_err("addr should be rejected");
    assert!(matches!(err, ConfigError::Invalid { var: "BIND_ADDR", .. }));
}
