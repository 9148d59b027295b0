//! Data model shared by the engine and the frontend: resource and field
//! descriptors, backend items, listings, enumeration groups and
//! permission flags.

pub mod enums;
pub mod field;
pub mod item;
pub mod permissions;
pub mod resource;
