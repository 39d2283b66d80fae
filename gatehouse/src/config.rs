use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;

#[derive(Deserialize, Debug)]
pub struct MetricsConfig {
    pub statsd_host: String,
    pub statsd_port: u16,
}

#[derive(Deserialize, Debug)]
pub struct Listener {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub listener: Listener,
    /// Directory holding the flat-file JSON documents. Created on
    /// startup if absent.
    pub data_dir: PathBuf,
    /// Directory with the static browser UI; nothing is served at the
    /// root when omitted.
    pub static_dir: Option<PathBuf>,
    /// StatsD metrics export. Metrics are dropped when omitted.
    pub metrics: Option<MetricsConfig>,
}

impl Config {
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config = serde_yaml::from_reader(file)?;
        Ok(config)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not load config from file: {0}")]
    LoadError(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp_file(s: &str) -> tempfile::NamedTempFile {
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        write!(tmp, "{}", s).expect("write yaml");

        tmp
    }

    #[test]
    fn minimal_config() {
        let yaml = r#"
            listener:
                host: 0.0.0.0
                port: 8080
            data_dir: /var/lib/gatehouse/data
            "#;
        let tmp = write_tmp_file(yaml);
        let config = Config::from_file(tmp.path()).expect("load config");
        assert_eq!(config.listener.host, "0.0.0.0");
        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/gatehouse/data"));
        assert!(config.static_dir.is_none());
        assert!(config.metrics.is_none());
    }

    #[test]
    fn full_config() {
        let yaml = r#"
            listener:
                host: 127.0.0.1
                port: 3000
            data_dir: ./data
            static_dir: ./static
            metrics:
                statsd_host: 127.0.0.1
                statsd_port: 8125
            "#;
        let tmp = write_tmp_file(yaml);
        let config = Config::from_file(tmp.path()).expect("load config");
        assert_eq!(config.static_dir, Some(PathBuf::from("./static")));
        let metrics = config.metrics.expect("metrics config");
        assert_eq!(metrics.statsd_port, 8125);
    }

    #[test]
    fn missing_listener_is_a_parse_error() {
        let tmp = write_tmp_file("data_dir: ./data\n");
        let err = Config::from_file(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
