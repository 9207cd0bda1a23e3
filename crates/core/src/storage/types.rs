use std::fmt;

/// Storage backends the service can run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryProvider {
    InMemory,
    Postgres,
}

impl RepositoryProvider {
    /// Parses a configuration token, case-insensitively.
    ///
    /// Returns `None` for unrecognized tokens; callers decide the fallback.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "in-memory" | "inmemory" | "memory" => Some(Self::InMemory),
            "psql" | "postgres" | "postgresql" => Some(Self::Postgres),
            _ => None,
        }
    }

    /// The canonical configuration token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InMemory => "in-memory",
            Self::Postgres => "psql",
        }
    }
}

impl fmt::Display for RepositoryProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
