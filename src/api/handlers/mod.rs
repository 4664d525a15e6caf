//! HTTP request handlers.

mod delete;
mod redirect;
mod register;
mod save;

pub use delete::delete_handler;
pub use redirect::redirect_handler;
pub use register::register_handler;
pub use save::save_handler;
