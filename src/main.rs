// src/main.rs
//
// Demo walkthrough: seeds the mock store and drives one full session the
// way the UI would - log in, read messages, reply, save the session, and
// run a content-assist generation.

use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bookme::services::{CannedGenerator, FixedCodeVerifier, TextGenerator, ThemePreferences};
use bookme::store::seed::{TEST_CLIENT_EMAIL, TEST_PASSWORD};
use bookme::store::MessageSender;
use bookme::{AuthFlow, MemoryStorage, MemoryStore, Role, SessionManager};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut prefs_storage = MemoryStorage::new();
    let prefs = ThemePreferences::load(&prefs_storage);
    info!(mode = prefs.mode.as_str(), accent = prefs.accent.as_str(), "Theme applied");

    let mut flow = AuthFlow::new(MemoryStore::seeded(), FixedCodeVerifier::default());
    flow.select_role(Role::Client);

    let success = flow
        .attempt_login(TEST_CLIENT_EMAIL, TEST_PASSWORD, true)
        .map_err(|e| anyhow::anyhow!("demo login failed: {e}"))?;
    info!(user = %success.user.name, "Signed in");

    let mut sessions = SessionManager::new(MemoryStorage::new(), MemoryStorage::new());
    sessions.save(&success.user, success.remember_me)?;

    let store = flow.store_mut();
    let talent = store
        .talents()
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("seed store has no talent"))?;
    let conversation = store.find_or_create_conversation_by_talent_id(&talent.id);
    info!(
        talent = %talent.name,
        unread = conversation.unread_count,
        last_message = conversation.last_message.as_deref().unwrap_or("-"),
        "Opened conversation"
    );

    store.mark_conversation_as_read(&conversation.id);
    store.add_message_to_conversation(
        &conversation.id,
        "Perfect, see you Saturday!",
        MessageSender::Me,
    );

    // Content assist runs against the injected generator; swap in
    // OpenAiGenerator::from_env() for real output.
    let generator = CannedGenerator::new(
        "Lagos-based photographer capturing golden-hour portraits and launch events.",
    );
    match generator
        .generate("Write a one-line bio for a photographer", "gpt-4o-mini")
        .await
    {
        Ok(bio) => info!(bio = %bio, "Generated profile bio"),
        Err(e) => info!(message = e.retry_message(), "Generation unavailable"),
    }

    prefs.save(&mut prefs_storage);
    info!("Demo session complete");
    Ok(())
}
