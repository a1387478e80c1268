use crate::catalog::MovieId;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A navigation address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    Catalog,
    /// `/movie/<id>`
    Movie(MovieId),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown address: {0}")]
    Unknown(String),

    #[error("missing movie id in address: {0}")]
    MissingId(String),
}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        if normalized.is_empty() {
            return Ok(Self::Catalog);
        }
        match normalized.strip_prefix("/movie") {
            Some("") => Err(RouteError::MissingId(trimmed.to_string())),
            Some(rest) => match rest.strip_prefix('/') {
                Some(id) if !id.is_empty() && !id.contains('/') => Ok(Self::Movie(MovieId::new(id))),
                _ => Err(RouteError::Unknown(trimmed.to_string())),
            },
            None => Err(RouteError::Unknown(trimmed.to_string())),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog => f.write_str("/"),
            Self::Movie(id) => write!(f, "/movie/{id}"),
        }
    }
}
