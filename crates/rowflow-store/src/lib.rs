//!
//! Rowflow Store - object store connection model
//!
//! Transformations reach remote content-addressed object stores through
//! named connections. This crate defines the connection descriptor value
//! object, the registry abstraction that resolves a name to a live
//! descriptor, and the response models whose field sets a retrieval step
//! contributes to the row schema.

#![forbid(unsafe_code)]

/// Named connection descriptors
pub mod connection;

/// Name-to-descriptor resolution
pub mod registry;

/// Store response models and their row field sets
pub mod response;

pub use connection::ConnectionDescriptor;
pub use registry::{ConnectionRegistry, InMemoryConnectionRegistry, RegistryError};
pub use response::{ReadResponse, SystemMetadata};
