pub(crate) mod app_error;
pub(crate) mod extractors;
pub(crate) mod handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;
