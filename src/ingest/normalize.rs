//! Normalization of raw data-source entries into catalog streams.
//!
//! Sources are forgiving about field names: the URL may arrive as
//! `url`, `link`, or `src`, and the title as `title`, `label`, or
//! `name`. Entries without any URL are skipped.

use serde_json::Value;
use uuid::Uuid;

use crate::domain::StreamPlatform;
use crate::error::GatewayError;
use crate::persistence::models::NewStream;

/// A source entry reduced to the fields the catalog cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedStream {
    /// Stream URL.
    pub url: String,
    /// Display title, defaulting to `"Untitled Stream"`.
    pub title: String,
    /// Optional thumbnail URL (`thumbnail` or `thumb`).
    pub thumbnail: Option<String>,
    /// Live flag (`is_live`), default false.
    pub is_live: bool,
    /// Platform detected from the URL.
    pub platform: StreamPlatform,
    /// The original entry, preserved in stream metadata.
    pub raw: Value,
}

impl NormalizedStream {
    /// Converts into an insertable stream row owned by `source_id`.
    #[must_use]
    pub fn into_new_stream(self, source_id: Uuid) -> NewStream {
        NewStream {
            id: Uuid::new_v4(),
            url: self.url,
            title: self.title,
            platform: self.platform.as_str().to_string(),
            thumbnail: self.thumbnail,
            metadata: serde_json::json!({
                "source_id": source_id,
                "original": self.raw,
            }),
            is_live: self.is_live,
            source_id: Some(source_id),
        }
    }
}

/// Normalizes a single raw entry. Returns `None` (with a warning) when
/// the entry has no usable URL.
#[must_use]
pub fn normalize_entry(value: &Value) -> Option<NormalizedStream> {
    let url = first_string(value, &["url", "link", "src"])?;
    let title = first_string(value, &["title", "label", "name"])
        .unwrap_or_else(|| "Untitled Stream".to_string());
    let thumbnail = first_string(value, &["thumbnail", "thumb"]);
    let is_live = value
        .get("is_live")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Some(NormalizedStream {
        platform: StreamPlatform::detect(&url),
        url,
        title,
        thumbnail,
        is_live,
        raw: value.clone(),
    })
}

/// Normalizes a batch, skipping entries without a URL.
#[must_use]
pub fn normalize_batch(entries: &[Value]) -> Vec<NormalizedStream> {
    let mut streams = Vec::with_capacity(entries.len());
    for entry in entries {
        match normalize_entry(entry) {
            Some(stream) => streams.push(stream),
            None => tracing::warn!(?entry, "source entry missing url, skipped"),
        }
    }
    streams
}

/// Parses a TOML source file: a top-level `streams` array of tables.
///
/// # Errors
///
/// Returns [`GatewayError::SourceSync`] for invalid TOML or a missing
/// `streams` array.
pub fn parse_toml_streams(text: &str) -> Result<Vec<Value>, GatewayError> {
    let table: toml::Table = toml::from_str(text)
        .map_err(|e| GatewayError::SourceSync(format!("invalid toml: {e}")))?;

    let Some(streams) = table.get("streams") else {
        return Err(GatewayError::SourceSync(
            "toml file has no `streams` array".to_string(),
        ));
    };
    let Some(entries) = streams.as_array() else {
        return Err(GatewayError::SourceSync(
            "`streams` is not an array".to_string(),
        ));
    };

    entries
        .iter()
        .map(|v| {
            serde_json::to_value(v)
                .map_err(|e| GatewayError::SourceSync(format!("toml entry not convertible: {e}")))
        })
        .collect()
}

/// Parses a JSON API response body: either a bare array of entries or
/// an object with a `streams` array.
///
/// # Errors
///
/// Returns [`GatewayError::SourceSync`] for invalid JSON or an
/// unexpected shape.
pub fn parse_json_streams(text: &str) -> Result<Vec<Value>, GatewayError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| GatewayError::SourceSync(format!("invalid json: {e}")))?;

    match value {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut obj) => match obj.remove("streams") {
            Some(Value::Array(entries)) => Ok(entries),
            _ => Err(GatewayError::SourceSync(
                "json response has no `streams` array".to_string(),
            )),
        },
        _ => Err(GatewayError::SourceSync(
            "json response is neither an array nor an object".to_string(),
        )),
    }
}

/// Extracts the first present non-empty string among `keys`.
fn first_string(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_aliased_fields() {
        let entry = serde_json::json!({
            "link": "https://twitch.tv/chan",
            "label": "Channel",
            "thumb": "https://cdn.example.com/t.jpg",
        });
        let Some(stream) = normalize_entry(&entry) else {
            panic!("expected normalized stream");
        };
        assert_eq!(stream.url, "https://twitch.tv/chan");
        assert_eq!(stream.title, "Channel");
        assert_eq!(stream.thumbnail.as_deref(), Some("https://cdn.example.com/t.jpg"));
        assert_eq!(stream.platform, StreamPlatform::Twitch);
        assert!(!stream.is_live);
    }

    #[test]
    fn missing_title_defaults() {
        let entry = serde_json::json!({"url": "https://example.com/a"});
        let Some(stream) = normalize_entry(&entry) else {
            panic!("expected normalized stream");
        };
        assert_eq!(stream.title, "Untitled Stream");
    }

    #[test]
    fn entry_without_url_is_skipped() {
        let entries = vec![
            serde_json::json!({"title": "no url"}),
            serde_json::json!({"url": "https://example.com/ok"}),
        ];
        let streams = normalize_batch(&entries);
        assert_eq!(streams.len(), 1);
    }

    #[test]
    fn url_aliases_respect_priority() {
        let entry = serde_json::json!({
            "url": "https://example.com/primary",
            "link": "https://example.com/secondary",
        });
        let Some(stream) = normalize_entry(&entry) else {
            panic!("expected normalized stream");
        };
        assert_eq!(stream.url, "https://example.com/primary");
    }

    #[test]
    fn parses_toml_stream_list() {
        let text = r#"
[[streams]]
url = "https://youtube.com/watch?v=a"
title = "First"

[[streams]]
link = "https://twitch.tv/b"
"#;
        let entries = parse_toml_streams(text);
        let Ok(entries) = entries else {
            panic!("expected parsed entries");
        };
        assert_eq!(entries.len(), 2);

        let streams = normalize_batch(&entries);
        assert_eq!(streams.len(), 2);
        assert_eq!(streams.first().map(|s| s.platform), Some(StreamPlatform::Youtube));
    }

    #[test]
    fn toml_without_streams_is_error() {
        let result = parse_toml_streams("title = \"not a source file\"");
        let Err(GatewayError::SourceSync(_)) = result else {
            panic!("expected SourceSync error");
        };
    }

    #[test]
    fn parses_bare_json_array() {
        let entries = parse_json_streams(r#"[{"url": "https://example.com/a"}]"#);
        let Ok(entries) = entries else {
            panic!("expected parsed entries");
        };
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn parses_wrapped_json_object() {
        let entries = parse_json_streams(r#"{"streams": [{"url": "x"}, {"url": "y"}]}"#);
        let Ok(entries) = entries else {
            panic!("expected parsed entries");
        };
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn json_scalar_is_error() {
        assert!(parse_json_streams("42").is_err());
    }

    #[test]
    fn new_stream_carries_source_metadata() {
        let entry = serde_json::json!({"url": "https://example.com/a", "extra": "kept"});
        let Some(stream) = normalize_entry(&entry) else {
            panic!("expected normalized stream");
        };
        let source_id = Uuid::new_v4();
        let new = stream.into_new_stream(source_id);
        assert_eq!(new.source_id, Some(source_id));
        assert_eq!(
            new.metadata.get("original").and_then(|o| o.get("extra")),
            Some(&serde_json::json!("kept"))
        );
    }
}
