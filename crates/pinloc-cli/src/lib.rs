//! pinloc-cli
//! ==========
//!
//! Command-line interface for the `pinloc-core` location index.
//!
//! This crate primarily provides a binary (`pinloc-cli`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install pinloc-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! pinloc-cli --help
//! pinloc-cli --input pincodes.json stats
//! pinloc-cli --input pincodes.json districts Karnataka
//! pinloc-cli --input pincodes.json pincode 5600
//! ```
//!
//! For programmatic access to the index and the selection coordinator, use
//! the [`pinloc-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/pinloc/pinloc-rs>
//! - Core crate: <https://docs.rs/pinloc-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
