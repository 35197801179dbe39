pub mod login;
pub mod session;

pub use login::login;
pub use session::{ADMIN_USER_ID, Role, Session};
