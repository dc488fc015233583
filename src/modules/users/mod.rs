pub mod service;
pub mod session;

pub use self::service::UserService;
pub use self::session::UserSession;
