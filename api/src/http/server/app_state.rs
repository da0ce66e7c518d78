use messages_core::{MessagesService, application::MessageRepositories};

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub service: MessagesService,
}

impl AppState {
    pub fn new(service: MessagesService) -> Self {
        Self { service }
    }
}

impl From<MessageRepositories> for AppState {
    fn from(repositories: MessageRepositories) -> Self {
        AppState::new(repositories.into())
    }
}
