//! platen-view
//!
//! The PDF response adapter: per-route view configuration, context control
//! keys, and the render → persist → respond orchestration. Template
//! rendering and PDF conversion come from `platen-render`; file persistence
//! from `platen-media` — both injected at construction, no ambient state.

pub mod context;
pub mod error;
pub mod view;
