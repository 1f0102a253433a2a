use super::ids::{self, IdGenerator};
use super::seed::Fixtures;
use crate::config::StoreSettings;
use crate::error::{BlogError, Result};
use crate::model::{Comment, Post, User};

const MAX_ID_ATTEMPTS: usize = 100;

/// Process-lifetime collections of users, posts and comments.
///
/// Entities are only ever appended; nothing is updated or removed.
pub struct Store {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    ids: Box<dyn IdGenerator>,
}

impl Store {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self::from_fixtures(Fixtures::default(), ids)
    }

    /// A store holding the demo data.
    pub fn seeded(ids: Box<dyn IdGenerator>) -> Self {
        Self::from_fixtures(Fixtures::demo(), ids)
    }

    pub fn from_fixtures(fixtures: Fixtures, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            users: fixtures.users,
            posts: fixtures.posts,
            comments: fixtures.comments,
            ids,
        }
    }

    /// Builds the initial store described by the settings: fixtures file,
    /// demo data, or empty.
    pub fn from_settings(settings: &StoreSettings) -> Result<Self> {
        let ids = ids::from_settings(settings);
        let store = if let Some(ref path) = settings.fixtures {
            Self::from_fixtures(Fixtures::from_file(path)?, ids)
        } else if settings.seed {
            Self::seeded(ids)
        } else {
            Self::new(ids)
        };
        tracing::info!(
            users = store.user_count(),
            posts = store.post_count(),
            comments = store.comment_count(),
            "Store initialized"
        );
        Ok(store)
    }

    /// A fresh id not used by any entity yet. Fails once the generator keeps
    /// producing taken ids, rather than blocking the store forever.
    pub fn next_id(&mut self) -> Result<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.generate();
            if !self.id_in_use(&id) {
                return Ok(id);
            }
            tracing::debug!(id = %id, "Generated id already in use, retrying");
        }
        tracing::error!(attempts = MAX_ID_ATTEMPTS, "Id space exhausted");
        Err(BlogError::Config(format!(
            "No unused id after {} attempts; increase store.id_length",
            MAX_ID_ATTEMPTS
        )))
    }

    fn id_in_use(&self, id: &str) -> bool {
        self.users.iter().any(|u| u.id == id)
            || self.posts.iter().any(|p| p.id == id)
            || self.comments.iter().any(|c| c.id == id)
    }

    /// All users, or those whose name contains `query` (case-insensitive).
    pub fn list_users(&self, query: Option<&str>) -> Vec<User> {
        match normalize_query(query) {
            None => self.users.clone(),
            Some(q) => self.users.iter().filter(|u| u.matches(&q)).cloned().collect(),
        }
    }

    /// All posts, or those whose title or body contains `query` (case-insensitive).
    pub fn list_posts(&self, query: Option<&str>) -> Vec<Post> {
        match normalize_query(query) {
            None => self.posts.clone(),
            Some(q) => self.posts.iter().filter(|p| p.matches(&q)).cloned().collect(),
        }
    }

    pub fn list_comments(&self) -> Vec<Comment> {
        self.comments.clone()
    }

    pub fn find_user_by_id(&self, id: &str) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    pub fn find_post_by_id(&self, id: &str) -> Option<Post> {
        self.posts.iter().find(|p| p.id == id).cloned()
    }

    pub fn email_taken(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email == email)
    }

    pub fn posts_by_author(&self, user_id: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.author == user_id)
            .cloned()
            .collect()
    }

    pub fn comments_by_author(&self, user_id: &str) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|c| c.author == user_id)
            .cloned()
            .collect()
    }

    pub fn comments_for_post(&self, post_id: &str) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|c| c.post == post_id)
            .cloned()
            .collect()
    }

    pub fn append_user(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn append_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    pub fn append_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

/// Lowercased filter; an empty filter means no filter.
fn normalize_query(query: Option<&str>) -> Option<String> {
    query.filter(|q| !q.is_empty()).map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{RandomIds, SequentialIds};

    fn demo_store() -> Store {
        Store::seeded(Box::new(SequentialIds::default()))
    }

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn test_list_users_without_filter() {
        let store = demo_store();
        assert_eq!(store.list_users(None).len(), 3);
        assert_eq!(store.list_users(Some("")).len(), 3);
    }

    #[test]
    fn test_list_users_case_insensitive() {
        let store = demo_store();
        assert_eq!(names(&store.list_users(Some("da"))), vec!["Dafo"]);
        assert_eq!(names(&store.list_users(Some("MIK"))), vec!["Mike"]);
        assert!(store.list_users(Some("zzz")).is_empty());
    }

    #[test]
    fn test_list_posts_matches_title_or_body() {
        let store = demo_store();
        assert_eq!(store.list_posts(Some("LOREM")).len(), 3);
        let by_title = store.list_posts(Some("post 2"));
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "22");
    }

    #[test]
    fn test_list_comments_is_unfiltered() {
        assert_eq!(demo_store().list_comments().len(), 4);
    }

    #[test]
    fn test_find_by_id() {
        let store = demo_store();
        assert_eq!(store.find_user_by_id("2").unwrap().name, "Dafo");
        assert!(store.find_user_by_id("999").is_none());
        assert!(store.find_post_by_id("11").unwrap().published);
        assert!(store.find_post_by_id("1").is_none());
    }

    #[test]
    fn test_relation_filters() {
        let store = demo_store();
        let posts: Vec<_> = store.posts_by_author("1").into_iter().map(|p| p.id).collect();
        assert_eq!(posts, vec!["11", "22"]);
        assert_eq!(store.comments_by_author("1").len(), 2);
        assert_eq!(store.comments_for_post("11").len(), 2);
        assert!(store.comments_for_post("999").is_empty());
    }

    #[test]
    fn test_email_taken() {
        let store = demo_store();
        assert!(store.email_taken("mike@dafond.dev"));
        assert!(!store.email_taken("MIKE@dafond.dev"));
    }

    #[test]
    fn test_next_id_skips_ids_in_use() {
        let mut store = demo_store();
        // The sequential generator starts at 1, which the demo users own.
        assert_eq!(store.next_id().unwrap(), "4");
        assert_eq!(store.next_id().unwrap(), "5");
    }

    #[test]
    fn test_next_id_fails_when_id_space_exhausted() {
        let mut store = Store::new(Box::new(RandomIds::new(1)));
        for c in "0123456789abcdefghijklmnopqrstuvwxyz".chars() {
            store.append_user(User::new(c.to_string(), "U", format!("{}@x.com", c)));
        }

        let err = store.next_id().unwrap_err();
        assert!(matches!(err, BlogError::Config(_)));
        assert!(err.to_string().contains("id_length"));
    }

    #[test]
    fn test_append() {
        let mut store = Store::new(Box::new(SequentialIds::default()));
        let id = store.next_id().unwrap();
        store.append_user(User::new(id.clone(), "Ann", "ann@x.com"));
        store.append_post(Post::new("p", "T", id.clone()));
        store.append_comment(Comment::new("c", "hi", id, "p"));
        assert_eq!(store.user_count(), 1);
        assert_eq!(store.post_count(), 1);
        assert_eq!(store.comment_count(), 1);
    }

    #[test]
    fn test_from_settings_without_seed_is_empty() {
        let settings = StoreSettings {
            seed: false,
            ..StoreSettings::default()
        };
        let store = Store::from_settings(&settings).unwrap();
        assert_eq!(store.user_count(), 0);
    }
}
