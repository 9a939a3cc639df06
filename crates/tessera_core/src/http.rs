//! HTTP method vocabulary of the generated operations.

use serde::{Deserialize, Serialize};
use tessera_error::{ConfigurationError, ConfigurationErrorKind};

/// The CRUD methods the pipeline can target.
///
/// Parsing an unknown method string fails with a [`ConfigurationError`];
/// inside the pipeline the enum is closed and exhaustively matched.
///
/// # Examples
///
/// ```
/// use tessera_core::HttpMethod;
///
/// let method: HttpMethod = "DELETE".parse().unwrap();
/// assert_eq!(method, HttpMethod::Delete);
/// assert_eq!(format!("{}", method), "DELETE");
/// assert!("PATCH".parse::<HttpMethod>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Read rows matching a filter
    Get,
    /// Insert rows
    Post,
    /// Update rows matching a filter
    Put,
    /// Delete rows matching a filter
    Delete,
}

impl std::str::FromStr for HttpMethod {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(ConfigurationError::new(
                ConfigurationErrorKind::UnsupportedMethod(other.to_string()),
            )),
        }
    }
}
