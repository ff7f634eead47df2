pub mod auth_service;
pub mod identity;
pub mod identity_ffi;

pub use identity::{AuthSubscription, FederatedProvider, IdentityService};
pub use identity_ffi::{init_identity, IdentityConfig, JsIdentityService};
