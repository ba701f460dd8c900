//! Feed content operations: posts, reels and their comments

use chrono::Utc;
use tracing::{info, warn};

use super::memory::MemoryStore;
use super::models::{Comment, NewPost, Post, Reel};
use crate::common::{generate_comment_id, generate_post_id};

impl MemoryStore {
    pub fn posts(&self) -> Vec<Post> {
        self.posts.clone()
    }

    pub fn reels(&self) -> Vec<Reel> {
        self.reels.clone()
    }

    pub fn get_posts_by_talent_id(&self, talent_id: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.talent_id == talent_id)
            .cloned()
            .collect()
    }

    pub fn get_reels_by_talent_id(&self, talent_id: &str) -> Vec<Reel> {
        self.reels
            .iter()
            .filter(|r| r.talent_id == talent_id)
            .cloned()
            .collect()
    }

    /// Create a post for a talent. New posts go to the front of the feed.
    pub fn add_post(&mut self, new_post: NewPost) -> Post {
        let post = Post {
            id: generate_post_id(),
            talent_id: new_post.talent_id,
            caption: new_post.caption,
            image_url: new_post.image_url,
            likes: 0,
            comments: Vec::new(),
            created_at: Utc::now(),
        };

        info!(
            post_id = %post.id,
            talent_id = %post.talent_id,
            "Post created"
        );

        self.posts.insert(0, post.clone());
        post
    }

    /// Append a comment to a post. Returns `None` if the post is unknown.
    pub fn add_comment_to_post(
        &mut self,
        post_id: &str,
        user_id: &str,
        text: &str,
    ) -> Option<Comment> {
        let post = self.posts.iter_mut().find(|p| p.id == post_id)?;
        let comment = new_comment(user_id, text);
        post.comments.push(comment.clone());

        info!(
            comment_id = %comment.id,
            post_id = %post_id,
            "Comment added to post"
        );

        Some(comment)
    }

    /// Append a comment to a reel. Returns `None` if the reel is unknown.
    pub fn add_comment_to_reel(
        &mut self,
        reel_id: &str,
        user_id: &str,
        text: &str,
    ) -> Option<Comment> {
        let reel = self.reels.iter_mut().find(|r| r.id == reel_id)?;
        let comment = new_comment(user_id, text);
        reel.comments.push(comment.clone());

        info!(
            comment_id = %comment.id,
            reel_id = %reel_id,
            "Comment added to reel"
        );

        Some(comment)
    }

    /// Flip the liked state of a comment, wherever it lives.
    ///
    /// Searches post comments first, then reel comments; the flip and the
    /// count adjustment happen together, so two calls restore the original
    /// state. Returns the updated comment, or `None` for an unknown id.
    pub fn toggle_comment_like(&mut self, comment_id: &str) -> Option<Comment> {
        let comment = self
            .posts
            .iter_mut()
            .flat_map(|p| p.comments.iter_mut())
            .chain(self.reels.iter_mut().flat_map(|r| r.comments.iter_mut()))
            .find(|c| c.id == comment_id);

        match comment {
            Some(c) => {
                c.liked = !c.liked;
                if c.liked {
                    c.likes += 1;
                } else {
                    c.likes = c.likes.saturating_sub(1);
                }
                Some(c.clone())
            }
            None => {
                warn!(comment_id = %comment_id, "Toggle like on unknown comment");
                None
            }
        }
    }
}

fn new_comment(user_id: &str, text: &str) -> Comment {
    Comment {
        id: generate_comment_id(),
        user_id: user_id.to_string(),
        text: text.to_string(),
        likes: 0,
        liked: false,
        created_at: Utc::now(),
    }
}
