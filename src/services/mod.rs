pub mod auth_service;
pub mod chat_service;
pub mod consent_store;
pub mod geocoding_service;
pub mod resolvers;
pub mod route_service;

pub use consent_store::{ConsentStorage, ConsentStore, LocalStorageBackend, MemoryBackend};
pub use resolvers::{
    BrowserLocationResolver, PermissionResolver, PhotoAccessResolver, ResolverError,
};
