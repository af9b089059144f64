//! Confluence REST API models for pages

use serde::{Deserialize, Serialize};

// ============================================================================
// Read Models
// ============================================================================

/// Page returned by `GET /rest/api/content`
#[derive(Debug, Clone, Deserialize)]
pub struct ConfluenceContent {
    pub id: String,
    pub title: String,
    pub space: Option<ConfluenceSpaceRef>,
    pub version: Option<ConfluenceVersion>,
    pub body: Option<ConfluenceBody>,
}

/// Space reference embedded in content
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfluenceSpaceRef {
    pub key: String,
}

/// Page version info
#[derive(Debug, Clone, Deserialize)]
pub struct ConfluenceVersion {
    pub number: i32,
}

/// Expanded page body
#[derive(Debug, Clone, Deserialize)]
pub struct ConfluenceBody {
    pub storage: Option<ConfluenceBodyValue>,
}

/// Body value with representation info
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfluenceBodyValue {
    pub value: String,
    pub representation: String,
}

/// Content search response
#[derive(Debug, Deserialize)]
pub struct ConfluenceContentList {
    pub results: Vec<ConfluenceContent>,
}

/// Response of `GET /rest/api/user/current`
#[derive(Debug, Deserialize)]
pub struct ConfluenceCurrentUser {
    #[serde(rename = "type")]
    pub user_type: Option<String>,
}

impl ConfluenceCurrentUser {
    /// Confluence answers with an anonymous user instead of 401 on some instances
    pub fn is_anonymous(&self) -> bool {
        self.user_type.as_deref() == Some("anonymous")
    }
}

// ============================================================================
// Update Models
// ============================================================================

/// Request body for `PUT /rest/api/content/{id}`
#[derive(Debug, Serialize)]
pub struct UpdateConfluenceContent {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub title: String,
    pub space: ConfluenceSpaceRef,
    pub version: UpdateConfluenceVersion,
    pub body: UpdateConfluenceBody,
}

/// Version info for update (required for optimistic locking)
#[derive(Debug, Serialize)]
pub struct UpdateConfluenceVersion {
    pub number: i32,
}

/// Body for update request, keyed by its representation
#[derive(Debug, Serialize)]
pub struct UpdateConfluenceBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<ConfluenceBodyValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki: Option<ConfluenceBodyValue>,
}

// ============================================================================
// Page Handle
// ============================================================================

/// Page fetched for editing
///
/// Obtain it with `ConfluenceClient::get_page`, replace the content with
/// `set_content`, then hand it to `ConfluenceClient::store_page`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiPage {
    pub id: String,
    pub space: String,
    pub title: String,
    /// Version the content was read at
    pub version: i32,
    content: String,
    representation: String,
}

impl WikiPage {
    pub(crate) fn from_content(content: ConfluenceContent, space: &str) -> Self {
        let (body, representation) = content
            .body
            .and_then(|b| b.storage)
            .map(|s| (s.value, s.representation))
            .unwrap_or_else(|| (String::new(), "storage".to_string()));

        Self {
            id: content.id,
            space: content.space.map(|s| s.key).unwrap_or_else(|| space.to_string()),
            title: content.title,
            version: content.version.map(|v| v.number).unwrap_or(1),
            content: body,
            representation,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Markup representation of `content` (`storage` when read, `wiki` once replaced)
    pub fn representation(&self) -> &str {
        &self.representation
    }

    /// Replace the page body with wiki markup
    pub fn set_content(&mut self, markup: &str) {
        self.content = markup.to_string();
        self.representation = "wiki".to_string();
    }

    pub(crate) fn to_update(&self) -> UpdateConfluenceContent {
        let value = ConfluenceBodyValue {
            value: self.content.clone(),
            representation: self.representation.clone(),
        };
        let body = if self.representation == "wiki" {
            UpdateConfluenceBody {
                storage: None,
                wiki: Some(value),
            }
        } else {
            UpdateConfluenceBody {
                storage: Some(value),
                wiki: None,
            }
        };

        UpdateConfluenceContent {
            id: self.id.clone(),
            content_type: "page".to_string(),
            title: self.title.clone(),
            space: ConfluenceSpaceRef {
                key: self.space.clone(),
            },
            version: UpdateConfluenceVersion {
                number: self.version + 1,
            },
            body,
        }
    }
}
