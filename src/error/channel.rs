use thiserror::Error;

/// Errors from the announcement channel collaborator.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for ChannelError {
    fn from(err: serenity::Error) -> Self {
        ChannelError::Discord(Box::new(err))
    }
}
