//! Data-size profiles and the content types the fixture emulates.

use serde::{Deserialize, Serialize};

/// How much synthetic data the fixture advertises. Selected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeProfile {
    Small,
    Medium,
    Large,
}

/// Counts derived from a [`SizeProfile`]; every payload is synthesized from these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileCounts {
    pub spaces: u32,
    pub objects_per_space: u32,
    pub attachments_per_object: u32,
}

impl SizeProfile {
    pub fn counts(self) -> ProfileCounts {
        match self {
            SizeProfile::Small => ProfileCounts {
                spaces: 10,
                objects_per_space: 25,
                attachments_per_object: 3,
            },
            SizeProfile::Medium => ProfileCounts {
                spaces: 10,
                objects_per_space: 50,
                attachments_per_object: 5,
            },
            SizeProfile::Large => ProfileCounts {
                spaces: 10,
                objects_per_space: 75,
                attachments_per_object: 7,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SizeProfile::Small => "small",
            SizeProfile::Medium => "medium",
            SizeProfile::Large => "large",
        }
    }
}

impl TryFrom<&str> for SizeProfile {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "small" => Ok(SizeProfile::Small),
            "medium" => Ok(SizeProfile::Medium),
            "large" => Ok(SizeProfile::Large),
            _ => Err(()),
        }
    }
}

impl ProfileCounts {
    /// Total documents a full sync against this profile is expected to yield:
    /// one per space, plus one per object per content type, times attachments.
    pub fn expected_document_count(&self) -> u64 {
        let spaces = u64::from(self.spaces);
        let objects = u64::from(self.objects_per_space);
        let attachments = u64::from(self.attachments_per_object);
        spaces + spaces * objects * attachments * ContentType::ALL.len() as u64
    }
}

/// The two content types a search can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Page,
    Blogpost,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::Page, ContentType::Blogpost];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Page => "page",
            ContentType::Blogpost => "blogpost",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_map_to_expected_counts() {
        let small = SizeProfile::Small.counts();
        assert_eq!(small.spaces, 10);
        assert_eq!(small.objects_per_space, 25);
        assert_eq!(small.attachments_per_object, 3);

        let large = SizeProfile::Large.counts();
        assert_eq!(large.objects_per_space, 75);
        assert_eq!(large.attachments_per_object, 7);
    }

    #[test]
    fn expected_document_count_covers_both_content_types() {
        // 10 spaces + 10 * 25 * 3 attachments for pages and blogposts each.
        assert_eq!(
            SizeProfile::Small.counts().expected_document_count(),
            10 + 10 * 25 * 3 * 2
        );
        assert_eq!(
            SizeProfile::Medium.counts().expected_document_count(),
            10 + 10 * 50 * 5 * 2
        );
    }

    #[test]
    fn profile_parses_from_lowercase_names() {
        assert_eq!(SizeProfile::try_from("small"), Ok(SizeProfile::Small));
        assert_eq!(SizeProfile::try_from("medium"), Ok(SizeProfile::Medium));
        assert_eq!(SizeProfile::try_from("large"), Ok(SizeProfile::Large));
        assert!(SizeProfile::try_from("massive").is_err());
    }
}
