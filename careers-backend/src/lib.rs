pub mod app;
pub mod error;
pub mod handlers;
pub mod service;
pub mod state;
pub mod store;
pub mod validation;

pub use app::build_router;
