use crate::domain::{
    common::CoreError,
    message::entities::{
        CreateMessageCommand, CreateMessageCommandResponse, GetMessageByIdQuery,
        GetMessageByIdQueryResponse, InsertMessageInput, Message, MessageId,
    },
};

pub trait MessageRepository: Send + Sync {
    /// Stores a message, assigning a fresh identifier when the input carries none.
    fn insert(
        &self,
        input: InsertMessageInput,
    ) -> impl Future<Output = Result<Message, CoreError>> + Send;

    fn find_by_id(
        &self,
        id: &MessageId,
    ) -> impl Future<Output = Result<Option<Message>, CoreError>> + Send;

    /// Like [`find_by_id`](Self::find_by_id), but absence is a
    /// [`CoreError::MessageNotFound`].
    fn get(&self, id: &MessageId) -> impl Future<Output = Result<Message, CoreError>> + Send {
        async move {
            self.find_by_id(id)
                .await?
                .ok_or(CoreError::MessageNotFound { id: *id })
        }
    }
}

/// Handles one request type.
///
/// Each request shape has exactly one handler, chosen when the
/// [`Service`](crate::domain::common::services::Service) is built. Resolution
/// happens at compile time, so there is no registry to miss at request time.
pub trait RequestHandler<R>: Send + Sync {
    type Response;

    fn handle(
        &self,
        request: R,
    ) -> impl Future<Output = Result<Self::Response, CoreError>> + Send;
}

/// The messages use cases exposed to delivery layers.
///
/// The trait requires `Send + Sync` so a single service value can be shared
/// across every request task of the HTTP server.
pub trait MessageService: Send + Sync {
    /// Creates a message from the command text.
    ///
    /// # Returns
    ///
    /// - `Ok(CreateMessageCommandResponse)` - carries the identifier assigned by the store
    /// - `Err(CoreError)` - if the repository fails
    fn create_message(
        &self,
        command: CreateMessageCommand,
    ) -> impl Future<Output = Result<CreateMessageCommandResponse, CoreError>> + Send;

    /// Retrieves a message by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(GetMessageByIdQueryResponse)` - the stored identifier and text
    /// - `Err(CoreError::MessageNotFound)` - no message exists with the given ID
    /// - `Err(CoreError)` - other repository failures
    fn get_message_by_id(
        &self,
        query: GetMessageByIdQuery,
    ) -> impl Future<Output = Result<GetMessageByIdQueryResponse, CoreError>> + Send;
}
