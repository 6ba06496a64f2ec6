//! Data source kinds.

use serde::{Deserialize, Serialize};

/// How a data source feeds the stream catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// A local TOML file re-read on an interval; changes re-sync the
    /// catalog.
    TomlFile,
    /// A JSON HTTP endpoint polled on an interval.
    JsonApi,
    /// Streams entered by hand; no background task.
    Manual,
}

impl SourceKind {
    /// Returns the kind as a lowercase string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TomlFile => "toml_file",
            Self::JsonApi => "json_api",
            Self::Manual => "manual",
        }
    }

    /// Parses a kind string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "toml_file" => Some(Self::TomlFile),
            "json_api" => Some(Self::JsonApi),
            "manual" => Some(Self::Manual),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trip() {
        for kind in [SourceKind::TomlFile, SourceKind::JsonApi, SourceKind::Manual] {
            assert_eq!(SourceKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(SourceKind::parse("csv_file"), None);
    }
}
