pub mod claims;
pub mod codec;
pub mod errors;
pub mod issuer;
pub mod validator;

pub use claims::Claims;
pub use claims::TokenKind;
pub use codec::TokenCodec;
pub use errors::TokenError;
pub use issuer::TokenIssuer;
pub use issuer::TokenPair;
pub use validator::TokenValidator;
pub use validator::Validated;
