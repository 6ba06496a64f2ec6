//! Service layer: business logic orchestration.
//!
//! [`StreamService`] owns the catalog, [`SessionService`] owns sessions,
//! views, and collaboration. Both persist through
//! [`crate::persistence::Store`] and emit events through the
//! [`crate::domain::EventBus`].

pub mod session_service;
pub mod stream_service;

pub use session_service::SessionService;
pub use stream_service::StreamService;
