//! HTTP boundary to the sharing service.
//!
//! The server is consumed as an opaque REST surface: one listing endpoint
//! and one create endpoint per category, rooted at the page's own location.
//! Requests go through `gloo-net` in the browser and `reqwest` in native
//! builds so the logic tests run on the host.

use serde::{Deserialize, Serialize};

/// The three resource kinds the service hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    File,
    Link,
    Text,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::File, Category::Link, Category::Text];

    /// Endpoint path segment.
    pub fn segment(&self) -> &'static str {
        match self {
            Category::File => "f",
            Category::Link => "l",
            Category::Text => "t",
        }
    }

    /// Human-readable plural label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::File => "files",
            Category::Link => "links",
            Category::Text => "texts",
        }
    }
}

/// One server-known identifier. Listing rows carry more columns than this;
/// only the id matters client-side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UsedEntry {
    pub id: i64,
}

/// Create body for a file entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PutFile {
    pub base64: String,
    pub filename: String,
}

/// Create body for a link entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PutLink {
    pub forward: String,
}

/// Create body for a text entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PutText {
    pub contents: String,
}

/// Category-specific create payload, serialized as the bare inner object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SubmissionPayload {
    File(PutFile),
    Link(PutLink),
    Text(PutText),
}

/// Status and body of a create request, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateResponse {
    pub status: u16,
    pub body: String,
}

impl CreateResponse {
    /// Exactly 201 is success; anything else fails with the body text as
    /// the error message.
    pub fn into_result(self) -> Result<(), String> {
        if self.status == 201 {
            Ok(())
        } else {
            Err(self.body)
        }
    }
}

/// Base URL of the service, derived from the page's own location.
pub fn base_url() -> String {
    let location = match web_sys::window().map(|w| w.location()) {
        Some(location) => location,
        None => return "/".to_string(),
    };
    normalize_base(
        &location.protocol().unwrap_or_default(),
        &location.host().unwrap_or_default(),
        &location.pathname().unwrap_or_default(),
    )
}

/// Join location parts into a base URL with a trailing separator.
pub fn normalize_base(protocol: &str, host: &str, pathname: &str) -> String {
    let mut base = format!("{}//{}{}", protocol, host, pathname);
    if !base.ends_with('/') {
        base.push('/');
    }
    base
}

/// URL of one entry: `<base><segment>/<token>`.
pub fn entry_url(base: &str, category: Category, token: &str) -> String {
    format!("{}{}/{}", base, category.segment(), token)
}

/// Fetch the server-known identifiers for one category.
pub async fn fetch_used(base: &str, category: Category) -> Result<Vec<UsedEntry>, String> {
    let url = format!("{}{}", base, category.segment());

    #[cfg(target_arch = "wasm32")]
    {
        let response = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Failed to fetch {} list: {}", category.label(), e))?;
        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }
        response
            .json::<Vec<UsedEntry>>()
            .await
            .map_err(|e| format!("Failed to parse {} list: {}", category.label(), e))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let response = reqwest::get(url)
            .await
            .map_err(|e| format!("Failed to fetch {} list: {}", category.label(), e))?;
        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()));
        }
        response
            .json::<Vec<UsedEntry>>()
            .await
            .map_err(|e| format!("Failed to parse {} list: {}", category.label(), e))
    }
}

/// Issue a create request and hand back the raw status and body.
///
/// No idempotency is assumed; resubmitting a taken identifier is the
/// server's call to reject.
pub async fn create(url: &str, payload: &SubmissionPayload) -> Result<CreateResponse, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let response = gloo_net::http::Request::put(url)
            .json(payload)
            .map_err(|e| format!("Failed to encode request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response body: {}", e))?;
        Ok(CreateResponse { status, body })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let client = reqwest::Client::new();
        let response = client
            .put(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response body: {}", e))?;
        Ok(CreateResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_appends_separator() {
        assert_eq!(
            normalize_base("https:", "share.example.com", "/bin"),
            "https://share.example.com/bin/"
        );
        assert_eq!(
            normalize_base("http:", "localhost:8080", "/"),
            "http://localhost:8080/"
        );
    }

    #[test]
    fn test_entry_url() {
        let base = "https://share.example.com/";
        assert_eq!(
            entry_url(base, Category::File, "abc123"),
            "https://share.example.com/f/abc123"
        );
        assert_eq!(
            entry_url(base, Category::Link, "zik0zj"),
            "https://share.example.com/l/zik0zj"
        );
        assert_eq!(
            entry_url(base, Category::Text, "0"),
            "https://share.example.com/t/0"
        );
    }

    #[test]
    fn test_create_response_classification() {
        let created = CreateResponse {
            status: 201,
            body: String::new(),
        };
        assert_eq!(created.into_result(), Ok(()));

        for status in [200, 400, 409, 500] {
            let rejected = CreateResponse {
                status,
                body: "id taken".to_string(),
            };
            assert_eq!(rejected.into_result(), Err("id taken".to_string()));
        }
    }

    #[test]
    fn test_payload_serializes_as_bare_object() {
        let file = SubmissionPayload::File(PutFile {
            base64: "aGVsbG8=".to_string(),
            filename: "hello.txt".to_string(),
        });
        assert_eq!(
            serde_json::to_string(&file).unwrap(),
            r#"{"base64":"aGVsbG8=","filename":"hello.txt"}"#
        );

        let link = SubmissionPayload::Link(PutLink {
            forward: "https://example.com".to_string(),
        });
        assert_eq!(
            serde_json::to_string(&link).unwrap(),
            r#"{"forward":"https://example.com"}"#
        );

        let text = SubmissionPayload::Text(PutText {
            contents: "hello".to_string(),
        });
        assert_eq!(
            serde_json::to_string(&text).unwrap(),
            r#"{"contents":"hello"}"#
        );
    }

    #[test]
    fn test_used_entry_ignores_extra_columns() {
        let entries: Vec<UsedEntry> =
            serde_json::from_str(r#"[{"id": 7, "filepath": "a.txt", "created": 0}, {"id": 42}]"#)
                .unwrap();
        assert_eq!(
            entries,
            vec![UsedEntry { id: 7 }, UsedEntry { id: 42 }]
        );
    }
}
