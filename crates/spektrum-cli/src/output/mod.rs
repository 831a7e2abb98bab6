use serde::Serialize;
use spektrum_sdk::{ResponseBody, SpektrumError};

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// The API's response body for a rejected request, rendered for stderr.
pub fn error_body(error: &anyhow::Error) -> Option<String> {
    let body = error.downcast_ref::<SpektrumError>()?.body()?;
    match body {
        ResponseBody::Empty => None,
        ResponseBody::Text(text) => Some(text.clone()),
        ResponseBody::Json(_) => serde_json::to_string_pretty(body).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn raw_is_compact_json() {
        let rendered = render(&json!({ "id": "p1", "owner": "u1" }), OutputFormat::Raw).unwrap();
        assert_eq!(rendered, r#"{"id":"p1","owner":"u1"}"#);
    }

    #[test]
    fn json_is_pretty() {
        let rendered = render(&json!({ "id": "p1" }), OutputFormat::Json).unwrap();
        assert_eq!(rendered, "{\n  \"id\": \"p1\"\n}");
    }

    #[test]
    fn error_body_renders_request_errors_only() {
        let rejected = anyhow::Error::from(SpektrumError::Request {
            status: 422,
            body: ResponseBody::Json(json!({ "error": "title required" })),
        });
        let rendered = error_body(&rejected).unwrap();
        assert!(rendered.contains("title required"));

        let empty = anyhow::Error::from(SpektrumError::Request {
            status: 500,
            body: ResponseBody::Empty,
        });
        assert!(error_body(&empty).is_none());

        let other = anyhow::anyhow!("boom");
        assert!(error_body(&other).is_none());
    }
}
