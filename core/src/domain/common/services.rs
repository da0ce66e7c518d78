use crate::domain::message::{
    handlers::{CreateMessageCommandHandler, GetMessageByIdQueryHandler},
    ports::MessageRepository,
};

/// Entry point of the domain layer.
///
/// Owns exactly one handler per request type. Handlers are wired here, once,
/// from the repository the service is built with, so the HTTP layer only ever
/// talks to the [`MessageService`](crate::domain::message::ports::MessageService) port.
#[derive(Clone)]
pub struct Service<M>
where
    M: MessageRepository,
{
    pub(crate) create_message_handler: CreateMessageCommandHandler<M>,
    pub(crate) get_message_by_id_handler: GetMessageByIdQueryHandler<M>,
}

impl<M> Service<M>
where
    M: MessageRepository + Clone,
{
    pub fn new(message_repository: M) -> Self {
        Self {
            create_message_handler: CreateMessageCommandHandler::new(message_repository.clone()),
            get_message_by_id_handler: GetMessageByIdQueryHandler::new(message_repository),
        }
    }
}
