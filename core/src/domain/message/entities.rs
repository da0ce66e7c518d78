use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct MessageId(pub Uuid);

impl MessageId {
    /// Fresh random (v4) identifier.
    pub fn generate() -> Self {
        MessageId(Uuid::new_v4())
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for MessageId {
    fn from(uuid: Uuid) -> Self {
        MessageId(uuid)
    }
}

impl From<MessageId> for Uuid {
    fn from(message_id: MessageId) -> Self {
        message_id.0
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
}

/// Input accepted by the store.
///
/// When `id` is `None` (or the nil UUID) the store assigns a fresh identifier.
#[derive(Debug, Clone)]
pub struct InsertMessageInput {
    pub id: Option<MessageId>,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct CreateMessageCommand {
    #[serde(default)]
    pub text: String,
}

impl CreateMessageCommand {
    pub fn into_input(self) -> InsertMessageInput {
        InsertMessageInput {
            id: None,
            text: self.text,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct CreateMessageCommandResponse {
    pub id: MessageId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetMessageByIdQuery {
    pub id: MessageId,
}

impl From<MessageId> for GetMessageByIdQuery {
    fn from(id: MessageId) -> Self {
        GetMessageByIdQuery { id }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, ToSchema)]
pub struct GetMessageByIdQueryResponse {
    pub id: MessageId,
    pub text: String,
}

impl From<Message> for GetMessageByIdQueryResponse {
    fn from(message: Message) -> Self {
        GetMessageByIdQueryResponse {
            id: message.id,
            text: message.text,
        }
    }
}
