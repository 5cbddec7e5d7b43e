use crate::config::Config;

// App state
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn official_domain(&self) -> &str {
        &self.config.official_domain
    }
}
