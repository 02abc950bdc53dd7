//! Wire model for the document-list REST API.
//!
//! This crate owns the request/response shapes shared by the `client` and the
//! `server` proxy. Record payloads stay flexible (`serde_json::Map`) because each
//! document type carries its own field set; only the identifier is validated at
//! the boundary.

use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Key the backend uses for a document's primary identifier.
pub const ID_KEY: &str = "name";
/// Accepted alternative identifier key for non-Frappe sources.
pub const FALLBACK_ID_KEY: &str = "id";
/// Field every document carries for its creation timestamp.
pub const CREATION_FIELD: &str = "creation";

/// Error returned by list decoding and remote list requests.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body was not a valid list envelope.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// A record in the response had no usable identifier.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

impl ListError {
    /// Build a [`ListError::Status`] from a non-success response body, preferring
    /// the backend's own error message when the body parses as an error envelope.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.summary())
            .unwrap_or_else(|| default_status_message(status).to_owned());
        Self::Status { status, message }
    }
}

fn default_status_message(status: u16) -> &'static str {
    match status {
        401 | 403 => "not permitted",
        404 => "not found",
        500..=599 => "server error",
        _ => "request rejected",
    }
}

// =============================================================================
// RECORD
// =============================================================================

/// One document returned by the list endpoint: a required identifier plus an
/// open set of fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Record {
    id: String,
    fields: Map<String, Value>,
}

impl Record {
    /// Validate a raw JSON value as a record.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidRecord`] when the value is not an object or
    /// has no string/integer identifier.
    pub fn from_value(value: Value) -> Result<Self, ListError> {
        match value {
            Value::Object(fields) => Self::try_from(fields),
            other => Err(ListError::InvalidRecord(format!("expected object, got {}", json_kind(&other)))),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Look up a field by name. The identifier key is included.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Look up a field and return it only when it is a non-empty string.
    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl TryFrom<Map<String, Value>> for Record {
    type Error = ListError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = record_id(&fields)?;
        Ok(Self { id, fields })
    }
}

impl From<Record> for Map<String, Value> {
    fn from(record: Record) -> Self {
        record.fields
    }
}

fn record_id(fields: &Map<String, Value>) -> Result<String, ListError> {
    let raw = fields
        .get(ID_KEY)
        .filter(|v| !v.is_null())
        .or_else(|| fields.get(FALLBACK_ID_KEY));
    match raw {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        Some(other) => Err(ListError::InvalidRecord(format!("unsupported identifier: {other}"))),
        None => Err(ListError::InvalidRecord(format!("missing `{ID_KEY}` field"))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// QUERY
// =============================================================================

const LIKE_OP: &str = "like";

/// A single `[field, "like", value]` filter.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub field: String,
    pub value: Value,
}

impl Filter {
    /// Prefix match: `[field, "like", "{term}%"]`.
    #[must_use]
    pub fn prefix(field: &str, term: &str) -> Self {
        Self { field: field.to_owned(), value: Value::String(format!("{term}%")) }
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.field)?;
        tuple.serialize_element(LIKE_OP)?;
        tuple.serialize_element(&self.value)?;
        tuple.end()
    }
}

/// Descending sort clause rendered as `"{field} desc"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderBy {
    pub field: String,
}

impl OrderBy {
    /// Newest documents first.
    #[must_use]
    pub fn newest_first() -> Self {
        Self { field: CREATION_FIELD.to_owned() }
    }

    #[must_use]
    pub fn render(&self) -> String {
        format!("{} desc", self.field)
    }
}

/// Parameters of one list request.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery {
    pub fields: Vec<String>,
    pub filters: Vec<Filter>,
    pub limit_start: u32,
    pub limit: u32,
    pub order_by: Option<OrderBy>,
}

impl ListQuery {
    /// Encode as URL query pairs for `GET /api/resource/{doctype}`.
    ///
    /// Empty `fields` and `filters` are omitted so the backend applies its
    /// own defaults.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if !self.fields.is_empty() {
            pairs.push(("fields", serde_json::to_string(&self.fields).unwrap_or_default()));
        }
        if !self.filters.is_empty() {
            pairs.push(("filters", serde_json::to_string(&self.filters).unwrap_or_default()));
        }
        pairs.push(("limit_start", self.limit_start.to_string()));
        pairs.push(("limit_page_length", self.limit.to_string()));
        if let Some(order_by) = &self.order_by {
            pairs.push(("order_by", order_by.render()));
        }
        pairs
    }
}

/// Resource path for a document type, e.g. `/api/resource/Student%20Group`.
#[must_use]
pub fn resource_path(doctype: &str) -> String {
    format!("/api/resource/{}", doctype.trim().replace(' ', "%20"))
}

// =============================================================================
// RESPONSE ENVELOPES
// =============================================================================

/// Success body of the list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope {
    #[serde(default)]
    pub data: Vec<Record>,
}

impl ListEnvelope {
    /// Decode a list response body.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Decode`] if the body is not a list envelope or any
    /// record fails identifier validation.
    pub fn decode(body: &str) -> Result<Vec<Record>, ListError> {
        serde_json::from_str::<Self>(body)
            .map(|envelope| envelope.data)
            .map_err(|e| ListError::Decode(e.to_string()))
    }
}

/// Error body returned by the backend on failed requests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exc_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    #[serde(default, rename = "_server_messages", skip_serializing_if = "Option::is_none")]
    pub server_messages: Option<String>,
}

impl ErrorEnvelope {
    /// Most specific human-readable message carried by the envelope.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.first_server_message()
            .or_else(|| self.exception.clone().filter(|s| !s.is_empty()))
            .or_else(|| match &self.message {
                Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                _ => None,
            })
            .or_else(|| self.exc_type.clone().filter(|s| !s.is_empty()))
    }

    /// `_server_messages` is a JSON string holding an array of JSON strings,
    /// each an object with a `message` key.
    fn first_server_message(&self) -> Option<String> {
        let raw = self.server_messages.as_deref()?;
        let entries: Vec<String> = serde_json::from_str(raw).ok()?;
        entries.iter().find_map(|entry| {
            let parsed: Value = serde_json::from_str(entry).ok()?;
            parsed
                .get("message")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        })
    }
}

/// Envelope of `/api/method/*` responses: `{"message": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MethodEnvelope<T> {
    pub message: T,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
