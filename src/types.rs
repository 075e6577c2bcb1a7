use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Slug of the pseudo-category that means "no filter"
pub const HOME_SLUG: &str = "home";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn new(id: u32, name: &str, slug: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
        }
    }

    /// Home is listed for navigation but never owns posts
    pub fn is_home(&self) -> bool {
        self.slug == HOME_SLUG
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Article,
    Video,
    Audio,
}

impl std::str::FromStr for PostType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" => Ok(PostType::Article),
            "video" => Ok(PostType::Video),
            "audio" => Ok(PostType::Audio),
            other => anyhow::bail!(
                "Invalid post type '{}'. Must be one of: article, video, audio",
                other
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Si,
}

/// Media attached to a post. Articles carry none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    None,
    Video(String),
    Audio(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: String,
    pub category_id: u32,
    pub category_name: String,
    pub language: Language,
    pub post_type: PostType,
    pub view_count: u64,
    #[serde(with = "timestamp")]
    pub published_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_id: Option<String>,
}

impl Post {
    /// Store the media reference; the two id fields are never both set
    pub fn set_media(&mut self, media: Media) {
        let (video_id, audio_id) = match media {
            Media::None => (None, None),
            Media::Video(id) => (Some(id), None),
            Media::Audio(id) => (None, Some(id)),
        };
        self.video_id = video_id;
        self.audio_id = audio_id;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Editor,
    User,
}

/// Mock account for access-control fixtures. The password is plaintext on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTypeStats {
    pub article: usize,
    pub video: usize,
    pub audio: usize,
    pub total: usize,
}

/// Complete generated dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub categories: Vec<Category>,
    pub posts: Vec<Post>,
    pub users: Vec<User>,
}

/// Timestamps are written without fractional seconds, always in UTC
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}
