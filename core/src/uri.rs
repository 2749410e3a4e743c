//! URI templates of the form `teams/{!:team_id}/users/{:id}`.
//!
//! `{!:name}` must be supplied, `{:name}` may be omitted, in which case the
//! whole segment disappears. Every substituted parameter is consumed; whatever
//! is left over becomes the query string.

use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};

/// Caller-supplied request parameters.
pub type Params = serde_json::Map<String, Value>;

/// Turn a JSON object into `Params`. Anything else yields empty parameters.
///
/// ```
/// use lokalise_core::params;
///
/// let p = params(serde_json::json!({"team_id": 1, "limit": 50}));
/// assert_eq!(p.len(), 2);
/// ```
pub fn params(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        _ => Params::new(),
    }
}

enum Segment<'a> {
    Literal(&'a str),
    Placeholder { name: &'a str, required: bool },
}

fn parse_segment(segment: &str) -> Segment<'_> {
    let inner = segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'));
    match inner {
        Some(inner) => match inner.strip_prefix("!:") {
            Some(name) => Segment::Placeholder {
                name,
                required: true,
            },
            None => Segment::Placeholder {
                name: inner.strip_prefix(':').unwrap_or(inner),
                required: false,
            },
        },
        None => Segment::Literal(segment),
    }
}

/// Expand `template` into path segments, removing used entries from `params`.
pub fn expand(template: &str, params: &mut Params) -> Result<Vec<String>> {
    let mut segments = Vec::new();
    for raw in template.split('/').filter(|s| !s.is_empty()) {
        match parse_segment(raw) {
            Segment::Literal(literal) => segments.push(literal.to_string()),
            Segment::Placeholder { name, required } => {
                match params.remove(name).as_ref().and_then(param_to_string) {
                    Some(value) => segments.push(value),
                    None if required => return Err(Error::MissingParam(name.to_string())),
                    None => {}
                }
            }
        }
    }
    Ok(segments)
}

/// Join `base` with the expanded `template` and append leftover `params` as a
/// query string.
pub fn build_url(base: &str, template: &str, mut params: Params) -> Result<String> {
    let segments = expand(template, &mut params)?;

    let mut url = Url::parse(base).map_err(|e| Error::InvalidUrl(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| Error::InvalidUrl(format!("{base} cannot be a base url")))?
        .pop_if_empty()
        .extend(&segments);

    let mut pairs: Vec<(String, String)> = params
        .iter()
        .filter_map(|(key, value)| param_to_string(value).map(|v| (key.clone(), v)))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }

    Ok(url.into())
}

/// Render a parameter the way the API expects it in a path or query string.
/// Arrays are comma-joined; null means "not supplied".
fn param_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(param_to_string)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}
