//! Builder for HTTP/1.x style responses and server initiated (reverse)
//! requests, assembled into one contiguous buffer that is written to the
//! connection as is.

pub mod config;
pub mod connection;
pub mod errors;
mod helpers;
pub mod response;
pub mod status;

pub use config::{BuilderConfig, ContentTypeScan};
pub use connection::{send_response, Connection, Disposition};
pub use errors::Error;
pub use response::{MessageKind, ResponseBuilder};
pub use status::StatusCode;
