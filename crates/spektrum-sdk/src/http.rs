//! Response decoding shared by every operation.
//!
//! The body is read in full as text and decoded leniently: JSON when it
//! parses, the raw text when it does not, nothing when it is empty. Only the
//! status code decides success; a malformed body never fails a call.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, SpektrumError};

/// Decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The body was empty.
    Empty,
    /// The body parsed as JSON.
    Json(Value),
    /// The body was not valid JSON; kept verbatim.
    Text(String),
}

impl ResponseBody {
    /// Decode `text`, falling back to the raw text if it is not JSON.
    #[must_use]
    pub fn parse(text: String) -> Self {
        if text.is_empty() {
            return Self::Empty;
        }
        serde_json::from_str(&text).map_or(Self::Text(text), Self::Json)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Collapse into a JSON value: `Empty` is `null`, `Text` is a string.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Empty => Value::Null,
            Self::Json(value) => value,
            Self::Text(text) => Value::String(text),
        }
    }
}

impl Serialize for ResponseBody {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_unit(),
            Self::Json(value) => value.serialize(serializer),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// Read a response to completion and map non-success statuses to
/// [`SpektrumError::Request`].
pub(crate) async fn read_response(resp: reqwest::Response) -> Result<ResponseBody> {
    let status = resp.status();
    let body = ResponseBody::parse(resp.text().await?);

    if !status.is_success() {
        return Err(SpektrumError::Request {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}
