//! Library side of the `projectk` binary: logging setup, settings and page
//! renderers.

pub mod logging;
pub mod render;
pub mod settings;
