use std::str::FromStr;

use crate::common::{ConfigSnafu, Error};

use super::provider::PROVIDER_NAME;

#[derive(Clone, serde::Deserialize)]
pub struct Config {
    pub access_token: String,
    #[serde(default)]
    pub keep_expired_records: bool,
    pub api_base: Option<url::Url>,
}

impl FromStr for Config {
    type Err = Error;

    /// Parses the single token configuration form: exactly one token,
    /// the access token.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut tokens = value.split_whitespace();

        let Some(access_token) = tokens.next() else {
            return ConfigSnafu {
                prefix: PROVIDER_NAME,
                message: "expected an access token",
            }
            .fail();
        };

        if tokens.next().is_some() {
            return ConfigSnafu {
                prefix: PROVIDER_NAME,
                message: "expected a single access token",
            }
            .fail();
        }

        Ok(Self {
            access_token: access_token.to_string(),
            keep_expired_records: false,
            api_base: None,
        })
    }
}
