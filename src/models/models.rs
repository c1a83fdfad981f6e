use serde::{Deserialize, Serialize};

use crate::core::helpers::trailing_segment;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    pub id: String,
    pub author: String,
    pub author_id: String,
    pub content: String,
    pub likes: i64,
}

/// Body of `POST /api/add-post`. Author fields are filled in server-side from
/// the session, so the client always sends them blank.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub author: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftShape {
    /// `{author, content, likes}`
    WithLikes,
    /// `{author, content, authorId}`
    WithAuthorId,
}

impl NewPost {
    pub fn new(content: &str, shape: DraftShape) -> Self {
        let (likes, author_id) = match shape {
            DraftShape::WithLikes => (Some(0), None),
            DraftShape::WithAuthorId => (None, Some(String::new())),
        };
        NewPost {
            author: String::new(),
            content: content.to_string(),
            likes,
            author_id,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ProfileDetails {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedScope {
    All,
    User(String),
}

impl FeedScope {
    /// Per-user scope taken from the trailing segment of a profile page URL.
    /// Always per-user, even when the segment is empty.
    pub fn for_profile(url: &str) -> Self {
        FeedScope::User(trailing_segment(url))
    }
}
