//! Data Transfer Objects for REST request/response serialization.
//!
//! Database records never leave the gateway directly; every response
//! goes through a DTO so the wire shape stays stable.

pub mod session_dto;
pub mod source_dto;
pub mod stream_dto;
pub mod view_dto;

pub use session_dto::*;
pub use source_dto::*;
pub use stream_dto::*;
pub use view_dto::*;
