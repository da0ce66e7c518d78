pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use application::{MessageRepositories, MessagesService, create_repositories};
pub use domain::common::{CoreError, services::Service};
pub use infrastructure::message::repositories::memory::InMemoryMessageRepository;
