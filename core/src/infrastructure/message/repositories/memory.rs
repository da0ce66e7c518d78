use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::domain::{
    common::CoreError,
    message::{
        entities::{InsertMessageInput, Message, MessageId},
        ports::MessageRepository,
    },
};

/// Process-lifetime message store.
///
/// One lock guards the whole map: inserts take it exclusively, lookups share
/// it. Clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryMessageRepository {
    messages: Arc<RwLock<HashMap<MessageId, Message>>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.messages.read().await.is_empty()
    }
}

impl MessageRepository for InMemoryMessageRepository {
    async fn insert(&self, input: InsertMessageInput) -> Result<Message, CoreError> {
        let mut messages = self.messages.write().await;

        // Collisions are not checked: v4 identifiers carry 122 random bits.
        let id = match input.id {
            Some(id) if !id.is_nil() => id,
            _ => MessageId::generate(),
        };

        let message = Message {
            id,
            text: input.text,
        };
        messages.insert(id, message.clone());

        Ok(message)
    }

    async fn find_by_id(&self, id: &MessageId) -> Result<Option<Message>, CoreError> {
        let messages = self.messages.read().await;

        Ok(messages.get(id).cloned())
    }
}
