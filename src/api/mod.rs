//! HTTP front end for single and batch conversions

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::create_router;
