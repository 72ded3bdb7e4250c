pub mod auth;
pub mod evidence;
pub mod reports;
pub mod taxonomy;

pub use auth::*;
pub use evidence::*;
pub use reports::*;
pub use taxonomy::*;
