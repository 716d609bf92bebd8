use std::env;
use std::net::{Ipv4Addr, SocketAddr};

use url::form_urlencoded;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://www.eki.ee/dict";
const DEFAULT_PORT: u16 = 3000;

/// URL templates for the four eki.ee pages the pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_base(DEFAULT_BASE_URL)
    }
}

impl Endpoints {
    pub fn with_base(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn help(&self) -> String {
        format!("{}/qs/muuttyybid.html", self.base)
    }

    pub fn suggestions(&self, term: &str) -> String {
        format!("{}/shs_soovita.cgi?D=ies&F=M&term={}", self.base, encode(term))
    }

    pub fn en_to_est(&self, term: &str) -> String {
        format!(
            "{}/ies/index.cgi?F=M&C06=en&C01=1&C02=1&C12=1&C13=1&Q={}",
            self.base,
            encode(term)
        )
    }

    pub fn definition(&self, term: &str) -> String {
        format!("{}/qs/index.cgi?&F=M&C01=1&C02=1&Q={}", self.base, encode(term))
    }
}

fn encode(term: &str) -> String {
    form_urlencoded::byte_serialize(term.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub endpoints: Endpoints,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            endpoints: Endpoints::default(),
        })
    }
}
