pub(crate) mod comment_repository;
pub(crate) mod post_repository;

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};

use crate::domain::error::DomainError;

const DUPLICATE_KEY_CODE: i32 = 11000;

pub(crate) fn map_mongo_error(err: MongoError, resource: &str) -> DomainError {
    if let ErrorKind::Write(WriteFailure::WriteError(write_err)) = err.kind.as_ref()
        && write_err.code == DUPLICATE_KEY_CODE
    {
        return DomainError::AlreadyExists(resource.to_string());
    }
    DomainError::Unexpected(err.to_string())
}
