#[macro_use]
mod encoding;
pub mod schema;
pub mod types;
mod validate;

pub use encoding::OneByteEncodable;
pub use schema::{BooleanPolicy, HostSchema, ValidationOptions};
pub use types::{DirectionCode, HorizontalDirection, UnknownDirection, VerticalDirection};
pub use validate::*;
