//! Conversation operations
//!
//! The conversation list is ordered: index 0 is the most recently active
//! thread. Sending a message moves its conversation to the front and
//! refreshes the last-message cache fields.

use chrono::Utc;
use tracing::{debug, info};

use super::memory::MemoryStore;
use super::models::{Conversation, Message, MessageSender};
use crate::common::{generate_conversation_id, generate_message_id};

impl MemoryStore {
    /// All conversations, most recently active first
    pub fn conversations(&self) -> Vec<Conversation> {
        self.conversations.clone()
    }

    pub fn get_conversation_by_id(&self, id: &str) -> Option<Conversation> {
        self.conversations.iter().find(|c| c.id == id).cloned()
    }

    /// Sum of unread counters across all conversations
    pub fn total_unread(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread_count).sum()
    }

    /// Find the thread with a talent, creating an empty one when absent.
    /// A fresh conversation starts at the front of the list.
    pub fn find_or_create_conversation_by_talent_id(&mut self, talent_id: &str) -> Conversation {
        if let Some(existing) = self
            .conversations
            .iter()
            .find(|c| c.talent_id == talent_id)
        {
            return existing.clone();
        }

        let conversation = Conversation {
            id: generate_conversation_id(),
            talent_id: talent_id.to_string(),
            messages: Vec::new(),
            unread_count: 0,
            last_message: None,
            last_message_at: None,
        };

        info!(
            conversation_id = %conversation.id,
            talent_id = %talent_id,
            "Conversation created"
        );

        self.conversations.insert(0, conversation.clone());
        conversation
    }

    /// Append a message to a conversation and return the updated thread.
    ///
    /// Moves the conversation to index 0, refreshes `last_message` and
    /// `last_message_at`, and bumps the unread counter for inbound
    /// (talent-sent) messages. Returns `None` for an unknown conversation.
    pub fn add_message_to_conversation(
        &mut self,
        conversation_id: &str,
        text: &str,
        sender: MessageSender,
    ) -> Option<Conversation> {
        let index = self
            .conversations
            .iter()
            .position(|c| c.id == conversation_id)?;

        let mut conversation = self.conversations.remove(index);
        let sent_at = Utc::now();
        let message = Message {
            id: generate_message_id(),
            sender,
            text: text.to_string(),
            read: sender == MessageSender::Me,
            sent_at,
        };

        info!(
            conversation_id = %conversation.id,
            message_id = %message.id,
            sender = ?sender,
            "Message added to conversation"
        );

        conversation.messages.push(message);
        conversation.last_message = Some(text.to_string());
        conversation.last_message_at = Some(sent_at);
        if sender == MessageSender::Talent {
            conversation.unread_count += 1;
        }

        self.conversations.insert(0, conversation.clone());
        Some(conversation)
    }

    /// Zero the unread counter and flag every message as read.
    /// Returns the updated thread, or `None` for an unknown conversation.
    pub fn mark_conversation_as_read(&mut self, conversation_id: &str) -> Option<Conversation> {
        let conversation = self
            .conversations
            .iter_mut()
            .find(|c| c.id == conversation_id)?;

        let newly_read = conversation.unread_count;
        conversation.unread_count = 0;
        for message in &mut conversation.messages {
            message.read = true;
        }

        debug!(
            conversation_id = %conversation_id,
            messages_marked = newly_read,
            "Conversation marked as read"
        );

        Some(conversation.clone())
    }
}
