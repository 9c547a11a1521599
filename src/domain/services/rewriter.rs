//! Template digest rewriter
//!
//! Literal substitution of old integrity digests with new ones. Nothing
//! but the digest text is touched, so surrounding markup (including the
//! `sha384-` prefix) survives byte for byte.

use super::differ::DigestChange;

/// Outcome of rewriting one template's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    /// Total occurrences replaced across all changes
    pub replacements: usize,
}

impl Rewrite {
    pub fn is_unchanged(&self) -> bool {
        self.replacements == 0
    }
}

/// Replace every occurrence of each change's old digest with its new one.
///
/// Changes are applied one after another in slice order, each against
/// the output of the previous one.
pub fn rewrite_digests(content: &str, changes: &[DigestChange]) -> Rewrite {
    let mut content = content.to_string();
    let mut replacements = 0;

    for change in changes {
        let old = change.old.as_str();
        let count = content.matches(old).count();
        if count == 0 {
            continue;
        }
        content = content.replace(old, change.new.as_str());
        replacements += count;
    }

    Rewrite {
        content,
        replacements,
    }
}
