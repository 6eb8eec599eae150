use std::io::Write;
use std::time::Duration;

use link2clash::Settings;

#[test]
fn test_settings_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
common:
  default_mode: 12
  output_path: "out/clash.yaml"
fetch:
  timeout_secs: 5
  proxy: "http://127.0.0.1:7890"
health_check:
  interval: 600
"#
    )
    .unwrap();

    let settings = Settings::load_from_file(file.path()).unwrap();
    assert_eq!(settings.default_mode, 12);
    assert_eq!(settings.output_path, "out/clash.yaml");
    assert_eq!(settings.fetch_timeout, Duration::from_secs(5));
    assert_eq!(
        settings.proxy_config.proxy.as_deref(),
        Some("http://127.0.0.1:7890")
    );
    assert_eq!(settings.health_check.interval, 600);
    assert_eq!(settings.health_check.tolerance, 50);
    assert_eq!(
        settings.health_check.url,
        "http://www.gstatic.com/generate_204"
    );
}

#[test]
fn test_settings_toml_content() {
    let settings = Settings::load_from_content(
        r#"
[fetch]
user_agent = "clash-verge"
proxy = "NONE"

[health_check]
url = "https://cp.cloudflare.com/generate_204"
tolerance = 100
"#,
    )
    .unwrap();

    assert_eq!(settings.default_mode, 6);
    assert_eq!(settings.user_agent, "clash-verge");
    assert!(settings.proxy_config.proxy.is_none());
    assert_eq!(settings.health_check.url, "https://cp.cloudflare.com/generate_204");
    assert_eq!(settings.health_check.tolerance, 100);
    assert_eq!(settings.health_check.interval, 300);
}

#[test]
fn test_settings_invalid_toml() {
    assert!(Settings::load_from_content("[fetch\ntimeout_secs = ").is_err());
}

#[test]
fn test_settings_missing_file() {
    assert!(Settings::load_from_file("/nonexistent/link2clash.toml").is_err());
}
