//! Core library for the carte-inscriptions command line application.
//!
//! The library exposes the pipeline that powers the command-line interface
//! as well as the integration tests. The modules are structured to keep
//! responsibilities narrow and composable: CSV adapters live under [`io`],
//! data representations inside [`model`], name canonicalisation in
//! [`normalize`], the postal-code/name join in [`resolve`], map drawing in
//! [`render`], and the end-to-end orchestration under [`pipeline`].

pub mod error;
pub mod io;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod resolve;

pub use error::{CarteError, Result};
