//! Utility Module
//!
//! - [`interner`]: String interning for shader pass tags
//!
//! Interned strings ([`Symbol`]s) compare in O(1), which keeps pass-tag
//! matching in `draw_renderers` cheap.
//!
//! ```rust,ignore
//! use frame_renderer::utils::interner;
//!
//! let a = interner::intern("SRPDefaultUnlit");
//! let b = interner::intern("SRPDefaultUnlit");
//! assert_eq!(a, b);
//! ```

pub mod interner;

pub use interner::Symbol;
