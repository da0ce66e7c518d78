use crate::{
    Service,
    domain::{
        common::CoreError,
        message::{
            entities::{
                CreateMessageCommand, GetMessageByIdQuery, InsertMessageInput, Message, MessageId,
            },
            ports::{MessageRepository, MessageService},
        },
    },
    infrastructure::message::repositories::memory::InMemoryMessageRepository,
};
use uuid::Uuid;

/// Repository whose every call fails, to observe error propagation.
#[derive(Clone)]
struct FailingMessageRepository;

impl MessageRepository for FailingMessageRepository {
    async fn insert(&self, _input: InsertMessageInput) -> Result<Message, CoreError> {
        Err(CoreError::Unknown {
            message: "store unavailable".to_string(),
        })
    }

    async fn find_by_id(&self, _id: &MessageId) -> Result<Option<Message>, CoreError> {
        Err(CoreError::Unknown {
            message: "store unavailable".to_string(),
        })
    }
}

// == Create Message Tests ==

#[tokio::test]
#[cfg(test)]
async fn test_create_message_success() -> Result<(), Box<dyn std::error::Error>> {
    let message_repo = InMemoryMessageRepository::new();
    let service = Service::new(message_repo.clone());

    let response = service
        .create_message(CreateMessageCommand {
            text: "hello".to_string(),
        })
        .await
        .expect("create_message returned an error");

    assert!(!response.id.is_nil(), "Expected a generated message ID");

    let stored = message_repo.get(&response.id).await?;
    assert_eq!(stored.text, "hello", "Expected stored text to match");

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_create_message_with_empty_text() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(InMemoryMessageRepository::new());

    let created = service
        .create_message(CreateMessageCommand::default())
        .await?;
    let fetched = service
        .get_message_by_id(GetMessageByIdQuery::from(created.id))
        .await?;

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.text, "", "Expected empty text to round-trip");

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_create_message_repository_failure() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(FailingMessageRepository);

    let err = service
        .create_message(CreateMessageCommand {
            text: "lost".to_string(),
        })
        .await
        .expect_err("Expected create_message to fail");

    assert!(matches!(err, CoreError::Unknown { .. }));

    Ok(())
}

// == Get Message Tests ==

#[tokio::test]
#[cfg(test)]
async fn test_get_message_success() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(InMemoryMessageRepository::new());

    let text = "multi\nline ✉️ text";
    let created = service
        .create_message(CreateMessageCommand {
            text: text.to_string(),
        })
        .await?;

    let fetched = service
        .get_message_by_id(GetMessageByIdQuery { id: created.id })
        .await
        .expect("get_message_by_id returned an error");

    assert_eq!(fetched.id, created.id, "Expected same message ID");
    assert_eq!(fetched.text, text, "Expected same message text");

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_get_message_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(InMemoryMessageRepository::new());
    let id = MessageId::from(Uuid::nil());

    let err = service
        .get_message_by_id(GetMessageByIdQuery { id })
        .await
        .expect_err("Expected get_message_by_id to fail");

    assert_eq!(err, CoreError::MessageNotFound { id });
    assert_eq!(
        err.to_string(),
        "message with ID 00000000-0000-0000-0000-000000000000 not found"
    );

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_get_message_repository_failure() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(FailingMessageRepository);

    let err = service
        .get_message_by_id(GetMessageByIdQuery {
            id: MessageId::generate(),
        })
        .await
        .expect_err("Expected get_message_by_id to fail");

    assert_eq!(
        err.to_string(),
        "an unknown error occurred: store unavailable"
    );

    Ok(())
}

#[tokio::test]
#[cfg(test)]
async fn test_services_share_repository_state() -> Result<(), Box<dyn std::error::Error>> {
    let message_repo = InMemoryMessageRepository::new();
    let writer = Service::new(message_repo.clone());
    let reader = Service::new(message_repo);

    let created = writer
        .create_message(CreateMessageCommand {
            text: "shared".to_string(),
        })
        .await?;
    let fetched = reader
        .get_message_by_id(GetMessageByIdQuery { id: created.id })
        .await?;

    assert_eq!(fetched.text, "shared");

    Ok(())
}
