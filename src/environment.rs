use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Where the briefing backend lives.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development backend.
    #[default]
    Local,
    /// Custom backend, e.g. a deployed aggregator.
    Custom { api_base_url: String },
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_base_url(&self) -> &str {
        match self {
            Environment::Local => "http://localhost:8000",
            Environment::Custom { api_base_url } => api_base_url,
        }
    }

    /// Resolves the environment from `BRIEFING_API_URL`, read once at startup.
    pub fn from_env() -> Self {
        std::env::var("BRIEFING_API_URL")
            .unwrap_or_default()
            .parse::<Environment>()
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(());
        }
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            _ => Ok(Environment::Custom {
                api_base_url: s.trim_end_matches('/').to_string(),
            }),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}
