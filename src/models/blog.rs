use super::Patch;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: String,
    pub tags: Vec<String>,
    pub author: String,
    pub published: bool,
    pub read_time: u32,
    pub created_at: String,
    pub updated_at: String,
}

/// Listing projection of a blog post; carries everything except `content`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub featured_image: String,
    pub tags: Vec<String>,
    pub author: String,
    pub published: bool,
    pub read_time: u32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlog {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub featured_image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlog {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub excerpt: Patch<String>,
    #[serde(default)]
    pub content: Patch<String>,
    #[serde(default)]
    pub featured_image: Patch<String>,
    #[serde(default)]
    pub tags: Patch<Vec<String>>,
    #[serde(default)]
    pub published: Patch<bool>,
}

/// Filter accepted by the blog listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlogFilter {
    pub published: Option<bool>,
}
