mod document;
mod entities;
mod error;
mod request;

pub use document::*;
pub use entities::*;
pub use error::*;
pub use request::*;
