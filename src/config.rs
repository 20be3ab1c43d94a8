use crate::common::Provider;

#[derive(Clone, serde::Deserialize)]
pub struct Config {
    pub google_domains: Option<crate::googledomains::Config>,
}

impl Config {
    pub fn into_impls(self) -> Vec<Box<dyn Provider>> {
        crate::registry::PROVIDERS
            .iter()
            .filter_map(|(_, constructor)| constructor(&self))
            .collect()
    }
}

#[cfg(feature = "cli")]
impl Config {
    /// Reads the configuration from ACMESYNC_* environment variables,
    /// e.g. ACMESYNC__GOOGLE_DOMAINS__ACCESS_TOKEN.
    pub fn populate_from_env() -> crate::common::Result<Self> {
        config::Config::builder()
            .add_source(
                config::Environment::with_prefix("ACMESYNC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|err| {
                crate::common::ConfigSnafu {
                    prefix: "environment",
                    message: err.to_string(),
                }
                .build()
            })
    }
}
