use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictError {
    #[error("word {word:?} contains {ch:?}, which is outside a-z")]
    InvalidCharacter { word: String, ch: char },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
