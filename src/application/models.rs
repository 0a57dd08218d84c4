//! Wire payloads mirroring the Confluence Cloud REST shapes the downstream
//! ingestion clients deserialize. Field names must match the real API
//! byte-for-byte, including the `_links` envelope and camelCase members.

use serde::{Deserialize, Serialize};

/// Page-level `_links`. `next` is always serialized, as literal `null` when
/// absent: the fixture advertises single-page collections only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageLinks {
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebuiLink {
    pub webui: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpacesPage {
    pub results: Vec<Space>,
    pub start: u32,
    pub limit: u32,
    pub size: u32,
    #[serde(rename = "_links")]
    pub links: PageLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(rename = "_links")]
    pub links: WebuiLink,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelPage {
    pub results: Vec<Label>,
    pub start: u32,
    pub limit: u32,
    pub size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub prefix: String,
    pub name: String,
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPage {
    pub results: Vec<Content>,
    pub start: u32,
    pub limit: u32,
    pub size: u32,
    #[serde(rename = "_links")]
    pub links: PageLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub history: ContentHistory,
    pub children: ContentChildren,
    pub body: ContentBody,
    pub space: SpaceName,
    #[serde(rename = "_links")]
    pub links: WebuiLink,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentHistory {
    pub last_updated: Timestamp,
    pub created_date: String,
    pub created_by: Author,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timestamp {
    pub when: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub public_name: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentChildren {
    pub attachment: AttachmentChildCount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentChildCount {
    pub size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBody {
    pub storage: StorageBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageBody {
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceName {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentPage {
    pub results: Vec<Attachment>,
    pub start: u32,
    pub limit: u32,
    pub size: u32,
    #[serde(rename = "_links")]
    pub links: PageLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub version: Timestamp,
    pub extensions: AttachmentExtensions,
    #[serde(rename = "_links")]
    pub links: AttachmentLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentExtensions {
    pub file_size: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentLinks {
    pub download: String,
    pub webui: String,
}
