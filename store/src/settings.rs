use crate::{Store, StoreError};
use serde::{Deserialize, Serialize};

const SETTINGS_FILE: &str = "settings.json";

/// Service settings. A single record, replaced wholesale on each save.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    /// Destination URL that form submissions are forwarded to. Empty
    /// until an admin configures one.
    pub endpoint: String,
}

impl Store {
    /// Returns the stored settings. If no settings file exists yet the
    /// default (empty endpoint) is written out and returned, so a GET
    /// always sees a well-formed record.
    pub fn load_settings(&self) -> Result<Settings, StoreError> {
        match self.read_document(SETTINGS_FILE)? {
            Some(settings) => Ok(settings),
            None => {
                let defaults = Settings::default();
                self.write_document(SETTINGS_FILE, &defaults)?;
                Ok(defaults)
            }
        }
    }

    pub fn store_settings(&self, settings: &Settings) -> Result<(), StoreError> {
        self.write_document(SETTINGS_FILE, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_initializes_default_settings() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let settings = store.load_settings().unwrap();
        assert_eq!(settings.endpoint, "");

        // The default must have been persisted.
        assert!(dir.path().join(SETTINGS_FILE).is_file());
    }

    #[test]
    fn settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let settings = Settings {
            endpoint: "https://hooks.example.com/entry".into(),
        };
        store.store_settings(&settings).unwrap();
        assert_eq!(store.load_settings().unwrap(), settings);
    }

    #[test]
    fn store_overwrites_previous_settings() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        store
            .store_settings(&Settings {
                endpoint: "http://first".into(),
            })
            .unwrap();
        store
            .store_settings(&Settings {
                endpoint: "http://second".into(),
            })
            .unwrap();
        assert_eq!(store.load_settings().unwrap().endpoint, "http://second");
    }
}
