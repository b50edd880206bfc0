pub mod dashboard;
pub mod home;
pub mod login;
pub mod love_page;
pub mod not_found;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use love_page::LovePage;
pub use not_found::{NotFound, NotFoundView};
