// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Spatial canvas gallery engine.
//!
//! Atelier lays an artwork collection out as cells on a pannable surface
//! larger than the viewport and drives every transition between views: a
//! medium filter that fades cells in and out, a focus view that zooms the
//! whole surface onto one artwork, and a scatter layout that flings the
//! grid apart behind an about panel and later restores it exactly. It owns
//! no window and draws nothing; the host feeds it input and time and draws
//! the [`gallery::Frame`] it returns.
//!
//! # Key entry points
//!
//! - [`gallery::Gallery`] - the engine, one owned value per gallery
//! - [`gallery::GalleryCommand`] - every operation the engine accepts
//! - [`input::InputProcessor`] - raw pointer/touch/wheel/key events to
//!   commands
//! - [`options::Options`] - runtime configuration (layout, pan, focus,
//!   scatter, parallax, filter, key bindings)
//! - [`store::ArtworkStore`] - the artwork collection and active filter
//!
//! # Architecture
//!
//! Everything is single-threaded and driven by the host clock. Every
//! mutating call takes a `now` instant; animations are tweens sampled in
//! [`gallery::Gallery::tick`], and every completion action (caption swap,
//! phase change, filtered-out flag, pan re-enable) runs there strictly
//! after its tween has finished.

pub mod animation;
pub mod chrome;
pub mod error;
pub mod focus;
pub mod gallery;
pub mod input;
pub mod layout;
pub mod options;
pub mod pan;
pub mod parallax;
pub mod scatter;
pub mod stage;
pub mod store;
pub mod surface;
pub mod util;
