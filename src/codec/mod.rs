pub mod color;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod types;
pub mod validator;


pub use color::*;
pub use decoder::*;
pub use encoder::*;
pub use error::*;
pub use types::*;
pub use validator::*;
