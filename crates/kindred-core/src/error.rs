pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("duplicate character id: {id}")]
    DuplicateId { id: String },

    #[error("character not found: {id}")]
    CharacterNotFound { id: String },

    #[error("invalid character data: {message}")]
    InvalidInput { message: String },
}
