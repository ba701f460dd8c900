//! Seeded demo dataset
//!
//! Builds the canned accounts and content the app ships with so every
//! screen has something to render before any real interaction happens.

use tracing::info;

use super::memory::MemoryStore;
use super::models::{
    MessageSender, NewJob, NewPost, NewUser, PortfolioItem, Review, Role,
};
use super::UserStore;

pub const TEST_CLIENT_EMAIL: &str = "client@book.me";
pub const TEST_TALENT_EMAIL: &str = "maya@book.me";
pub const TEST_PASSWORD: &str = "password123";

impl MemoryStore {
    /// A store pre-populated with the demo accounts and content
    pub fn seeded() -> Self {
        let mut store = MemoryStore::new();

        let client = store
            .add_user(NewUser {
                name: "Test Client".to_string(),
                email: TEST_CLIENT_EMAIL.to_string(),
                phone: Some("5550100".to_string()),
                password: TEST_PASSWORD.to_string(),
                role: Role::Client,
            })
            .unwrap_or_else(|| unreachable!("seed store starts empty"));

        let talent_user = store
            .add_user(NewUser {
                name: "Maya Okafor".to_string(),
                email: TEST_TALENT_EMAIL.to_string(),
                phone: Some("5550101".to_string()),
                password: TEST_PASSWORD.to_string(),
                role: Role::Talent,
            })
            .unwrap_or_else(|| unreachable!("seed store starts empty"));

        let talent_id = talent_user
            .talent_id
            .clone()
            .unwrap_or_else(|| unreachable!("talent signup links a talent record"));

        // Flesh out the seeded talent profile
        if let Some(talent) = store.talents.get_mut(&talent_id) {
            talent.profession = "Photographer".to_string();
            talent.rating = 4.8;
            talent.hustles = vec!["photography".to_string(), "videography".to_string()];
            talent.reviews.push(Review {
                author: "Sam".to_string(),
                rating: 5.0,
                text: "Shot our launch event, photos came back the next day.".to_string(),
            });
            talent.portfolio.push(PortfolioItem {
                title: "Rooftop session".to_string(),
                media_url: "https://cdn.book.me/portfolio/rooftop.jpg".to_string(),
            });
        }

        let post = store.add_post(NewPost {
            talent_id: talent_id.clone(),
            caption: "Golden hour portraits from Saturday's shoot".to_string(),
            image_url: Some("https://cdn.book.me/posts/golden-hour.jpg".to_string()),
        });
        store.add_comment_to_post(&post.id, &client.id, "These are stunning!");

        let reel = super::models::Reel {
            id: crate::common::generate_reel_id(),
            talent_id: talent_id.clone(),
            caption: "Behind the scenes".to_string(),
            video_url: "https://cdn.book.me/reels/bts.mp4".to_string(),
            likes: 12,
            comments: Vec::new(),
            created_at: chrono::Utc::now(),
        };
        store.reels.push(reel.clone());
        store.add_comment_to_reel(&reel.id, &client.id, "Love the setup");

        let conversation = store.find_or_create_conversation_by_talent_id(&talent_id);
        store.add_message_to_conversation(
            &conversation.id,
            "Hi! Are you free for a shoot next weekend?",
            MessageSender::Me,
        );
        store.add_message_to_conversation(
            &conversation.id,
            "Hey! Saturday morning works for me.",
            MessageSender::Talent,
        );

        store.add_job(NewJob {
            client_id: client.id.clone(),
            title: "Product photos for an online store".to_string(),
            profession: "photographer".to_string(),
            budget: 350,
            location: "Lagos".to_string(),
            description: Some("Around 30 items, white background.".to_string()),
        });

        info!(
            users = store.users.len(),
            talents = store.talents.len(),
            posts = store.posts.len(),
            conversations = store.conversations.len(),
            jobs = store.jobs.len(),
            "Seeded demo store"
        );

        store
    }
}
