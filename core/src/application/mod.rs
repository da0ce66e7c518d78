use crate::{
    domain::common::{CoreError, services::Service},
    infrastructure::message::repositories::memory::InMemoryMessageRepository,
};

/// Concrete service type backed by the in-memory repository
pub type MessagesService = Service<InMemoryMessageRepository>;

#[derive(Clone, Default)]
pub struct MessageRepositories {
    pub message_repository: InMemoryMessageRepository,
}

/// Builds every repository the service needs. Called once at startup.
pub async fn create_repositories() -> Result<MessageRepositories, CoreError> {
    let message_repository = InMemoryMessageRepository::new();
    tracing::info!(
        messages = message_repository.len().await,
        "in-memory message repository ready"
    );

    Ok(MessageRepositories { message_repository })
}

impl From<MessageRepositories> for MessagesService {
    fn from(repositories: MessageRepositories) -> Self {
        Service::new(repositories.message_repository)
    }
}
