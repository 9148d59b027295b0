//! Shared core of Aviges: resource descriptors, the generic CRUD screen
//! controller, session roles and the runtime configuration served to the
//! browser.

pub mod config;
pub mod error;
pub mod form;
pub mod hooks;
pub mod label;
pub mod model;
pub mod naming;
pub mod registry;
pub mod requests;
pub mod screen;
pub mod session;
pub mod template;
