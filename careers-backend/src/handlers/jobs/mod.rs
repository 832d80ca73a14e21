pub mod create;
pub mod dto;
pub mod get_by_id;
pub mod list;

pub use create::create;
pub use get_by_id::get_by_id;
pub use list::list;
