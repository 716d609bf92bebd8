use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("Invalid suggestion list: {0}")]
    Suggestions(String),
}

impl ScrapeError {
    pub fn transport<E: std::fmt::Display>(url: &str, e: E) -> Self {
        Self::Transport {
            url: url.to_string(),
            message: e.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
