use crate::domain::{
    common::{CoreError, services::Service},
    message::{
        entities::{
            CreateMessageCommand, CreateMessageCommandResponse, GetMessageByIdQuery,
            GetMessageByIdQueryResponse,
        },
        ports::{MessageRepository, MessageService, RequestHandler},
    },
};

impl<M> MessageService for Service<M>
where
    M: MessageRepository,
{
    #[tracing::instrument(skip(self, command))]
    async fn create_message(
        &self,
        command: CreateMessageCommand,
    ) -> Result<CreateMessageCommandResponse, CoreError> {
        self.create_message_handler.handle(command).await
    }

    #[tracing::instrument(skip(self, query), fields(message_id = %query.id))]
    async fn get_message_by_id(
        &self,
        query: GetMessageByIdQuery,
    ) -> Result<GetMessageByIdQueryResponse, CoreError> {
        self.get_message_by_id_handler.handle(query).await
    }
}
