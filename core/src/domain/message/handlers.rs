use crate::domain::{
    common::CoreError,
    message::{
        entities::{
            CreateMessageCommand, CreateMessageCommandResponse, GetMessageByIdQuery,
            GetMessageByIdQueryResponse,
        },
        ports::{MessageRepository, RequestHandler},
    },
};

#[derive(Clone)]
pub struct CreateMessageCommandHandler<M>
where
    M: MessageRepository,
{
    message_repository: M,
}

impl<M> CreateMessageCommandHandler<M>
where
    M: MessageRepository,
{
    pub fn new(message_repository: M) -> Self {
        Self { message_repository }
    }
}

impl<M> RequestHandler<CreateMessageCommand> for CreateMessageCommandHandler<M>
where
    M: MessageRepository,
{
    type Response = CreateMessageCommandResponse;

    async fn handle(
        &self,
        command: CreateMessageCommand,
    ) -> Result<CreateMessageCommandResponse, CoreError> {
        let message = self.message_repository.insert(command.into_input()).await?;
        tracing::debug!(message_id = %message.id, "message created");

        Ok(CreateMessageCommandResponse { id: message.id })
    }
}

#[derive(Clone)]
pub struct GetMessageByIdQueryHandler<M>
where
    M: MessageRepository,
{
    message_repository: M,
}

impl<M> GetMessageByIdQueryHandler<M>
where
    M: MessageRepository,
{
    pub fn new(message_repository: M) -> Self {
        Self { message_repository }
    }
}

impl<M> RequestHandler<GetMessageByIdQuery> for GetMessageByIdQueryHandler<M>
where
    M: MessageRepository,
{
    type Response = GetMessageByIdQueryResponse;

    async fn handle(
        &self,
        query: GetMessageByIdQuery,
    ) -> Result<GetMessageByIdQueryResponse, CoreError> {
        let message = self.message_repository.get(&query.id).await?;

        Ok(message.into())
    }
}
