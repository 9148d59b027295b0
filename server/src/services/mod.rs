//! HTTP routes of the host. The business API lives in a separate backend;
//! this server only publishes the browser's runtime configuration and the
//! compiled front end.

pub mod embedded;
pub mod runtime_config;
