pub mod errors;
pub mod maker;
pub mod payload;
pub mod symmetric;

pub use errors::TokenError;
pub use maker::TokenMaker;
pub use payload::Payload;
pub use symmetric::SymmetricTokenMaker;
pub use symmetric::KEY_SIZE;
