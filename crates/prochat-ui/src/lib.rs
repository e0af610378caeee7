#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! ProChat brand logo for Yew front-ends.
//!
//! The markup is built by [`render_logo`], which works anywhere; the
//! `ProChatLogo` component and the demo shell are only compiled for wasm32.

pub mod attrs;
pub mod error;
pub mod i18n;
pub mod markup;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
pub use attrs::HtmlAttributes;
pub use markup::{LogoMarkup, render_logo};
