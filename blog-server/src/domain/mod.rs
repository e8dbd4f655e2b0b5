pub(crate) mod comment;
pub(crate) mod error;
pub(crate) mod post;
