//! Global String Interner
//!
//! Backs [`ShaderTagId`](crate::core::shader_tag::ShaderTagId): pass tag
//! names are interned once and compared as integer symbols afterwards, the
//! same way a host pipeline hands out pass tag ids.

use std::sync::LazyLock;

use lasso::{Spur, ThreadedRodeo};

/// Global interner instance.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::new);

/// Compact integer identifier for an interned string.
pub type Symbol = Spur;

/// Interns a string, returning its symbol.
///
/// Returns the existing symbol if the string was interned before.
#[inline]
pub fn intern(s: &str) -> Symbol {
    INTERNER.get_or_intern(s)
}

/// Returns the symbol of an already interned string without interning it.
#[inline]
pub fn get(s: &str) -> Option<Symbol> {
    INTERNER.get(s)
}

/// Resolves a symbol back to its string.
#[inline]
pub fn resolve(sym: Symbol) -> &'static str {
    INTERNER.resolve(&sym)
}

/// Pre-interns the built-in pass tag names so the first frame does not
/// touch the interner's write path.
pub fn preload_builtin_pass_tags() {
    use crate::core::shader_tag::{LEGACY_PASS_NAMES, SRP_DEFAULT_UNLIT};

    intern(SRP_DEFAULT_UNLIT);
    for name in LEGACY_PASS_NAMES {
        intern(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_resolve() {
        let s1 = intern("ForwardBase");
        let s2 = intern("ForwardBase");
        let s3 = intern("ShadowCaster");

        assert_eq!(s1, s2);
        assert_ne!(s1, s3);

        assert_eq!(resolve(s1), "ForwardBase");
        assert_eq!(resolve(s3), "ShadowCaster");
    }

    #[test]
    fn test_get() {
        let _ = intern("existing_pass");

        assert!(get("existing_pass").is_some());
        assert!(get("never_interned_pass").is_none());
    }

    #[test]
    fn test_preload_builtin_pass_tags() {
        preload_builtin_pass_tags();
        assert!(get("SRPDefaultUnlit").is_some());
        assert!(get("VertexLMRGBM").is_some());
    }
}
