//! UI layer.
//!
//! Widgets paint into a backend-neutral [`core::painter::Painter`]; `backend` turns the recorded
//! commands into terminal cells (or a headless buffer in tests).

pub mod backend;
pub mod core;
pub mod view;
pub mod widgets;
