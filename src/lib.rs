//! pinloc-rs
//!
//! Workspace wrapper crate: re-exports `pinloc-core` so the demos under
//! `demos/` can depend on one name. Applications should depend on
//! `pinloc-core` directly.

pub use pinloc_core::*;

pub use pinloc_core::prelude;
