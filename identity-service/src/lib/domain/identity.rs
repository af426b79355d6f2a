pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

pub use errors::AuthError;
pub use models::Credentials;
pub use models::Handle;
pub use models::Identity;
pub use models::IdentityId;
pub use models::RegisterCommand;
pub use ports::AuthServicePort;
pub use ports::UserDirectory;
pub use service::AuthService;
