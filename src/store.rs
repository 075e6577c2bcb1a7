use crate::types::{Fixture, Post, PostType, PostTypeStats, User, HOME_SLUG};

pub const DEFAULT_FEATURED_LIMIT: usize = 3;
pub const DEFAULT_LATEST_LIMIT: usize = 6;
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// In-memory owner of the generated posts and users.
///
/// Lookups borrow the store; the only mutation, `increment_view_count`,
/// needs `&mut self`, so there is a single writer at any time.
#[derive(Debug, Clone)]
pub struct PostStore {
    posts: Vec<Post>,
    users: Vec<User>,
}

impl PostStore {
    pub fn new(posts: Vec<Post>, users: Vec<User>) -> Self {
        Self { posts, users }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// All posts for "home", otherwise posts whose normalized category name equals the slug
    pub fn posts_by_category(&self, category_slug: &str) -> Vec<&Post> {
        if category_slug == HOME_SLUG {
            return self.posts.iter().collect();
        }

        self.posts
            .iter()
            .filter(|p| normalize_category_name(&p.category_name) == category_slug)
            .collect()
    }

    pub fn posts_by_type(&self, post_type: PostType) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| p.post_type == post_type)
            .collect()
    }

    pub fn post_type_stats(&self) -> PostTypeStats {
        let mut stats = PostTypeStats {
            total: self.posts.len(),
            ..PostTypeStats::default()
        };

        for post in &self.posts {
            match post.post_type {
                PostType::Article => stats.article += 1,
                PostType::Video => stats.video += 1,
                PostType::Audio => stats.audio += 1,
            }
        }

        stats
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// First `limit` posts in generation order
    pub fn featured_posts(&self, limit: usize) -> Vec<&Post> {
        self.posts.iter().take(limit).collect()
    }

    pub fn latest_posts(&self, limit: usize) -> Vec<&Post> {
        let mut posts: Vec<_> = self.posts.iter().collect();
        // sort_by is stable, so equal timestamps keep generation order
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts.into_iter().take(limit).collect()
    }

    pub fn related_posts(&self, post_id: u32, category_id: u32, limit: usize) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| p.id != post_id && p.category_id == category_id)
            .take(limit)
            .collect()
    }

    /// Bump a post's view count in memory. Nothing is persisted.
    pub fn increment_view_count(&mut self, post_id: u32) -> Option<&Post> {
        let post = self.posts.iter_mut().find(|p| p.id == post_id)?;
        post.view_count += 1;
        tracing::debug!(id = post_id, views = post.view_count, "Incremented view count");
        Some(&*post)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    /// The admin account, kept for consumers that expect a single mock user
    pub fn default_user(&self) -> Option<&User> {
        self.users.get(1)
    }
}

impl From<Fixture> for PostStore {
    fn from(fixture: Fixture) -> Self {
        Self::new(fixture.posts, fixture.users)
    }
}

/// Lowercase a category name and turn every whitespace run into one hyphen
pub fn normalize_category_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::news_tables;
    use crate::generator::{generate, GeneratorOptions};

    fn store() -> PostStore {
        generate(&GeneratorOptions::default(), &news_tables()).into()
    }

    #[test]
    fn test_normalize_category_name() {
        assert_eq!(normalize_category_name("Sri Lanka"), "sri-lanka");
        assert_eq!(normalize_category_name("A  Long   Name"), "a-long-name");
        assert_eq!(normalize_category_name("Other"), "other");
    }

    #[test]
    fn test_posts_by_category() {
        let store = store();
        let posts = store.posts_by_category("sri-lanka");
        assert_eq!(posts.len(), 12);
        assert!(posts.iter().all(|p| p.category_id == 2));

        assert_eq!(store.posts_by_category("international").len(), 12);
        assert!(store.posts_by_category("missing").is_empty());
    }

    #[test]
    fn test_home_returns_everything() {
        let store = store();
        assert_eq!(store.posts_by_category("home").len(), store.posts().len());
    }

    #[test]
    fn test_posts_by_type_preserves_order() {
        let store = store();
        let videos = store.posts_by_type(PostType::Video);
        let expected: Vec<_> = store
            .posts()
            .iter()
            .filter(|p| p.post_type == PostType::Video)
            .map(|p| p.id)
            .collect();
        let ids: Vec<_> = videos.iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
        assert!(!ids.is_empty());
    }

    #[test]
    fn test_post_type_stats() {
        let stats = store().post_type_stats();
        assert_eq!(stats.total, 60);
        assert_eq!(stats.article, 30);
        assert_eq!(stats.video, 15);
        assert_eq!(stats.audio, 15);
    }

    #[test]
    fn test_post_by_slug() {
        let store = store();
        assert_eq!(store.post_by_slug("political-post-2").map(|p| p.id), Some(14));
        assert!(store.post_by_slug("nope").is_none());
    }

    #[test]
    fn test_featured_posts_are_positional() {
        let store = store();
        let ids: Vec<_> = store
            .featured_posts(DEFAULT_FEATURED_LIMIT)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.featured_posts(100).len(), 60);
    }

    #[test]
    fn test_latest_posts_sorted_descending() {
        let store = store();
        let latest = store.latest_posts(DEFAULT_LATEST_LIMIT);
        let ids: Vec<_> = latest.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        for pair in latest.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
        let newest = store.posts().iter().map(|p| p.published_at).max();
        assert_eq!(Some(latest[0].published_at), newest);
    }

    #[test]
    fn test_latest_posts_ties_keep_order() {
        let mut posts = store().posts().to_vec();
        let same = posts[0].published_at;
        for post in posts.iter_mut() {
            post.published_at = same;
        }
        let store = PostStore::new(posts, Vec::new());
        let ids: Vec<_> = store.latest_posts(3).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_related_posts() {
        let store = store();
        let related = store.related_posts(1, 2, DEFAULT_RELATED_LIMIT);
        let ids: Vec<_> = related.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
        assert!(related.iter().all(|p| p.category_id == 2));
    }

    #[test]
    fn test_increment_view_count() {
        let mut store = store();
        let before = store.post_by_slug("sri-lanka-post-1").map(|p| p.view_count);
        assert_eq!(before, Some(537));

        let after = store.increment_view_count(1).map(|p| p.view_count);
        assert_eq!(after, Some(538));
        assert_eq!(store.posts()[0].view_count, 538);

        assert!(store.increment_view_count(999).is_none());
    }

    #[test]
    fn test_user_lookup() {
        let store = store();
        let editor = store.user_by_email("editor@darkroom.lk");
        assert_eq!(editor.map(|u| u.id), Some(3));
        assert!(store.user_by_email("EDITOR@darkroom.lk").is_none());
        assert_eq!(
            store.default_user().map(|u| u.email.as_str()),
            Some("admin@darkroom.lk")
        );
    }
}
