mod login;
mod navbar;
mod recovery;
mod welcome;

pub use login::Login;
pub use navbar::Navbar;
pub use recovery::Recovery;
pub use welcome::Welcome;
