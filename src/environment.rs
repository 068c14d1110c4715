use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the different classifier service deployments the CLI can talk to.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development service.
    Local,
    /// Staging deployment for pre-production testing.
    Staging,
    /// Production deployment.
    #[default]
    Production,
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8000".to_string(),
            Environment::Staging => "https://staging.urlshield.dev".to_string(),
            Environment::Production => "https://api.urlshield.dev".to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Staging => write!(f, "Staging"),
            Environment::Production => write!(f, "Production"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}
