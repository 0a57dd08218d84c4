//! Synthesis of every payload the fixture serves, plus the only mutable
//! state it carries: the one-way `first_sync` flag and the attachment store.

use std::sync::atomic::{AtomicBool, Ordering};

use bytes::Bytes;
use dashmap::DashMap;

use crate::application::error::FixtureError;
use crate::application::html::WeightedHtmlProvider;
use crate::application::models::{
    Attachment, AttachmentChildCount, AttachmentExtensions, AttachmentLinks, AttachmentPage,
    Author, Content, ContentBody, ContentChildren, ContentHistory, ContentPage, Label, LabelPage,
    PageLinks, Space, SpaceName, SpacesPage, StorageBody, Timestamp, WebuiLink,
};
use crate::domain::{CqlFilter, ProfileCounts, SizeProfile};

/// Spaces that "disappear" between the first and second sync, so incremental
/// clients can be exercised against deletions.
const SPACES_DELETED_AFTER_FIRST_SYNC: u32 = 5;

const REPORTED_SPACE_LIMIT: u32 = 100;
const REPORTED_LABEL_LIMIT: u32 = 5;
const REPORTED_SEARCH_LIMIT: u32 = 50;
const REPORTED_ATTACHMENT_LIMIT: u32 = 100;

const LAST_UPDATED_AT: &str = "2023-01-24T04:07:19.672Z";
const CREATED_AT: &str = "2023-01-03T09:24:50.633Z";
const AUTHOR_NAME: &str = "user1";
const LABEL_NAME: &str = "label-xyz";

/// Every search result is stamped with this space name regardless of the
/// space the query asked for, matching the served fixture data that the
/// consuming test suites assert on.
const STAMPED_SPACE_NAME: &str = "Demo Space 0";

/// Owns the fixture's process-wide state. Constructed once at startup and
/// shared behind an `Arc` by the HTTP layer.
pub struct ContentCatalog {
    counts: ProfileCounts,
    first_sync: AtomicBool,
    attachments: DashMap<String, String>,
    html: WeightedHtmlProvider,
}

impl ContentCatalog {
    pub fn new(profile: SizeProfile) -> Self {
        Self {
            counts: profile.counts(),
            first_sync: AtomicBool::new(true),
            attachments: DashMap::new(),
            html: WeightedHtmlProvider::new(),
        }
    }

    /// Spaces collection with two-call pagination semantics: the first normal
    /// call returns the full space count and flips `first_sync`; later calls
    /// return five fewer. `limit=1` short-circuits to a single space without
    /// touching the flag. `_links.next` is always null.
    pub fn spaces_page(&self, limit: Option<u32>) -> SpacesPage {
        let (total, reported_limit) = if limit == Some(1) {
            (1, 1)
        } else if self.first_sync.swap(false, Ordering::SeqCst) {
            (self.counts.spaces, REPORTED_SPACE_LIMIT)
        } else {
            (
                self.counts.spaces - SPACES_DELETED_AFTER_FIRST_SYNC,
                REPORTED_SPACE_LIMIT,
            )
        };

        let results = (0..total)
            .map(|i| Space {
                id: format!("space_{i}"),
                key: format!("space{i}"),
                name: format!("Demo Space {i}"),
                links: WebuiLink {
                    webui: format!("/spaces/space{i}"),
                },
            })
            .collect();

        SpacesPage {
            results,
            start: 0,
            limit: reported_limit,
            size: total,
            links: PageLinks::default(),
        }
    }

    /// One fixed synthetic label bound to the requested content id.
    pub fn label_page(&self, label_id: &str) -> LabelPage {
        LabelPage {
            results: vec![Label {
                prefix: "global".to_string(),
                name: LABEL_NAME.to_string(),
                id: label_id.to_string(),
                label: LABEL_NAME.to_string(),
            }],
            start: 0,
            limit: REPORTED_LABEL_LIMIT,
            size: 1,
        }
    }

    /// Content search over the two supported CQL fragments. Returns one full
    /// page of synthetic items of the requested type.
    pub fn search_page(&self, cql: &str) -> Result<ContentPage, FixtureError> {
        let filter = CqlFilter::parse(cql)?;
        let content_type = &filter.content_type;
        let space = &filter.space;

        let results = (0..self.counts.objects_per_space)
            .map(|i| Content {
                id: format!("{content_type}_{space}_{i}"),
                title: format!("ES-scrum_{i}"),
                content_type: content_type.clone(),
                history: ContentHistory {
                    last_updated: Timestamp {
                        when: LAST_UPDATED_AT.to_string(),
                    },
                    created_date: CREATED_AT.to_string(),
                    created_by: Author {
                        public_name: AUTHOR_NAME.to_string(),
                        username: AUTHOR_NAME.to_string(),
                    },
                },
                children: ContentChildren {
                    attachment: AttachmentChildCount {
                        size: self.counts.attachments_per_object,
                    },
                },
                body: ContentBody {
                    storage: StorageBody {
                        value: self.html.html(),
                    },
                },
                space: SpaceName {
                    name: STAMPED_SPACE_NAME.to_string(),
                },
                links: WebuiLink {
                    webui: format!(
                        "/spaces/space0/{content_type}/{content_type}_{i}/ES-scrum_{i}"
                    ),
                },
            })
            .collect();

        Ok(ContentPage {
            results,
            start: 0,
            limit: REPORTED_SEARCH_LIMIT,
            size: REPORTED_SEARCH_LIMIT,
            links: PageLinks::default(),
        })
    }

    /// Generate the attachments of a content item, caching each body so a
    /// later download returns exactly the bytes whose size was advertised.
    pub fn attachments_page(&self, content_id: &str) -> AttachmentPage {
        let results = (1..=self.counts.attachments_per_object)
            .map(|n| {
                let name = format!("attachment_{content_id}_{n}.html");
                let body = self.html.html();
                let file_size = body.len() as u64;
                self.attachments.insert(name.clone(), body);

                Attachment {
                    id: format!("attachment_{content_id}_{n}"),
                    title: name.clone(),
                    content_type: "attachment".to_string(),
                    version: Timestamp {
                        when: CREATED_AT.to_string(),
                    },
                    extensions: AttachmentExtensions { file_size },
                    links: AttachmentLinks {
                        download: format!("/download/attachments/{content_id}/{name}"),
                        webui: format!(
                            "/pages/viewpageattachments.action?pageId={content_id}&preview={name}"
                        ),
                    },
                }
            })
            .collect();

        AttachmentPage {
            results,
            start: 0,
            limit: REPORTED_ATTACHMENT_LIMIT,
            size: self.counts.attachments_per_object,
            links: PageLinks::default(),
        }
    }

    /// Raw bytes of a previously listed attachment. A name that was never
    /// listed is a harness bug and fails hard.
    pub fn attachment_body(&self, name: &str) -> Result<Bytes, FixtureError> {
        self.attachments
            .get(name)
            .map(|entry| Bytes::copy_from_slice(entry.value().as_bytes()))
            .ok_or_else(|| FixtureError::UnknownAttachment {
                name: name.to_string(),
            })
    }
}
