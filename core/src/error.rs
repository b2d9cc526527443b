use crate::DocId;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("document {0:?} has no text")]
    EmptyDocument(String),

    #[error("document {0} is already indexed")]
    DuplicateDocument(DocId),
}

pub type Result<T> = core::result::Result<T, Error>;
