use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::infra::{
    config::{load, AppConfig},
    contracts::ConfigAdapter,
};

/// Reads config from a TOML file, then applies command-line overrides.
#[derive(Debug, Clone, Default)]
pub struct FileConfigAdapter {
    path: Option<PathBuf>,
    overrides: ConfigOverrides,
}

/// Values given on the command line; they win over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub user_id: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.base_url {
            config.server.base_url = base_url.clone();
        }

        if let Some(user_id) = &self.user_id {
            config.server.user_id = user_id.clone();
        }
    }
}

impl FileConfigAdapter {
    pub fn new(path: Option<&Path>, overrides: ConfigOverrides) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
            overrides,
        }
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        let mut config = load(self.path.as_deref())?;
        self.overrides.apply(&mut config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_defaults() {
        let adapter = FileConfigAdapter::new(
            Some(Path::new("./missing-config.toml")),
            ConfigOverrides {
                base_url: Some("http://10.0.0.5:8000".to_owned()),
                user_id: None,
            },
        );

        let config = adapter.load().expect("config must load");

        assert_eq!(config.server.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.server.user_id, "web-ui-user");
    }
}
