use std::fmt;

#[derive(Debug)]
pub enum MeteoError {
    Upstream(String),
    Document(String),
    Transport(String),
}

impl fmt::Display for MeteoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MeteoError::Upstream(e) => write!(f, "MeteoError::Upstream: {}", e),
            MeteoError::Document(e) => write!(f, "MeteoError::Document: {}", e),
            MeteoError::Transport(e) => write!(f, "MeteoError::Transport: {}", e),
        }
    }
}
impl From<reqwest::Error> for MeteoError {
    fn from(e: reqwest::Error) -> Self {
        MeteoError::Transport(e.to_string())
    }
}
impl From<serde_json::Error> for MeteoError {
    fn from(e: serde_json::Error) -> Self {
        MeteoError::Document(e.to_string())
    }
}
