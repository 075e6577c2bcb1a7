use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::config::GenerationConfig;
use crate::content::{self, CategoryTemplates, AUDIO_IDS, IMAGES, VIDEO_IDS};
use crate::types::{Fixture, Media, Post, PostType};

/// Knobs for a generation run
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Instant the newest post is counted back from
    pub base_date: DateTime<Utc>,
    pub posts_per_category: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            base_date: default_base_date(),
            posts_per_category: 12,
        }
    }
}

impl From<&GenerationConfig> for GeneratorOptions {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            base_date: config.base_date,
            posts_per_category: config.posts_per_category,
        }
    }
}

pub fn default_base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 13, 10, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Expand the template tables into the full fixture.
///
/// Ids run globally across categories in table order, starting at 1. Every
/// post is three hours older than the one before it. Options loaded through
/// `config::load_config` are already validated against overflow.
pub fn generate(options: &GeneratorOptions, tables: &[CategoryTemplates]) -> Fixture {
    let mut posts = Vec::with_capacity(tables.len() * options.posts_per_category);
    let mut next_id: u32 = 1;

    for table in tables {
        if table.templates.is_empty() {
            tracing::warn!(
                category = %table.category.name,
                "No templates for category, skipping"
            );
            continue;
        }

        for index in 0..options.posts_per_category {
            let post = build_post(next_id, index, table, options.base_date);
            tracing::debug!(id = post.id, slug = %post.slug, "Generated post");
            posts.push(post);
            next_id += 1;
        }
    }

    let categories = std::iter::once(content::home_category())
        .chain(tables.iter().map(|t| t.category.clone()))
        .collect();

    Fixture {
        categories,
        posts,
        users: content::mock_users(),
    }
}

fn build_post(id: u32, index: usize, table: &CategoryTemplates, base_date: DateTime<Utc>) -> Post {
    let templates = table.templates;
    let template = &templates[index % templates.len()];

    // Only reached once a category asks for more posts than it has templates
    let title = if index >= templates.len() {
        format!(
            "{} - Update {}",
            template.title,
            index - templates.len() + 1
        )
    } else {
        template.title.to_string()
    };

    let published_at = base_date - Duration::hours(i64::from(id) * 3);
    let created_at = published_at - Duration::hours(1);

    let media = match template.post_type {
        PostType::Article => Media::None,
        PostType::Video => Media::Video(VIDEO_IDS[index % VIDEO_IDS.len()].to_string()),
        PostType::Audio => Media::Audio(AUDIO_IDS[index % AUDIO_IDS.len()].to_string()),
    };

    let mut post = Post {
        id,
        title,
        slug: format!("{}-post-{}", table.category.slug, index + 1),
        excerpt: template.excerpt.to_string(),
        content: content::body_for(template.excerpt),
        featured_image: IMAGES[index % IMAGES.len()].to_string(),
        category_id: table.category.id,
        category_name: table.category.name.clone(),
        language: template.language,
        post_type: template.post_type,
        view_count: 500 + u64::from(id) * 37,
        published_at,
        created_at,
        video_id: None,
        audio_id: None,
    };
    post.set_media(media);
    post
}
