pub mod activity_log;
pub mod evidence;
pub mod reports;
pub mod taxonomy;
pub mod user;

pub use activity_log::*;
pub use evidence::*;
pub use reports::*;
pub use taxonomy::*;
pub use user::*;
