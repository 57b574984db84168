pub mod create;
pub mod delete;
pub mod echo;
pub mod fallback;
pub mod get;
pub mod health;
pub mod list;
pub mod preflight;
pub mod put;
pub mod root;
pub mod time;

pub use create::create_handler;
pub use delete::delete_handler;
pub use echo::echo_handler;
pub use fallback::{fallback_handler, method_not_allowed_handler};
pub use get::get_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use preflight::preflight_handler;
pub use put::put_handler;
pub use root::root_handler;
pub use time::time_handler;
