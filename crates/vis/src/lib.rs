//! veloplot's visualization library.
//!
//! Lays normalized race records out on a scatter plot, renders it as SVG
//! and wraps it in a standalone HTML page with a hover tooltip.
//!
//! **WARNING**: This library is veloplot's internal visualization library and
//! there are no plans to stabilize it. The API may break at any time without notice.

pub(crate) mod html;
pub(crate) mod template;

pub mod chart;
pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod scale;
pub mod tooltip;
