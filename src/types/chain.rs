// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Identifier chains
//!
//! A chain locates a scope in the call tree: the root scope's identifier first,
//! then one identifier per nesting level down to the scope itself.

use std::fmt;

use super::id::ScopeId;

/// Ordered identifiers from the root scope down to the current one
///
/// Chains are never empty. A child chain is always its parent chain with exactly
/// one identifier appended, so `len() == depth() + 1`.
///
/// # Examples
///
/// ```
/// use calltree::{IdChain, ScopeId};
///
/// let root = IdChain::root(ScopeId::new(0));
/// let child = root.child(ScopeId::new(2));
///
/// assert_eq!(root.to_string(), "[a]");
/// assert_eq!(child.to_string(), "[a-c]");
/// assert_eq!(child.depth(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdChain {
    ids: Vec<ScopeId>,
}

impl IdChain {
    /// Chain of a top-level scope
    pub fn root(id: ScopeId) -> Self {
        Self { ids: vec![id] }
    }

    /// Chain of a nested scope under `self`
    pub fn child(&self, id: ScopeId) -> Self {
        let mut ids = Vec::with_capacity(self.ids.len() + 1);
        ids.extend_from_slice(&self.ids);
        ids.push(id);
        Self { ids }
    }

    /// Identifier of the scope this chain points at
    pub fn id(&self) -> ScopeId {
        // Constructors guarantee at least one element
        self.ids[self.ids.len() - 1]
    }

    /// Chain of the enclosing scope, `None` for a root chain
    pub fn parent(&self) -> Option<Self> {
        if self.ids.len() > 1 {
            Some(Self {
                ids: self.ids[..self.ids.len() - 1].to_vec(),
            })
        } else {
            None
        }
    }

    /// Nesting depth, zero for root scopes
    pub fn depth(&self) -> usize {
        self.ids.len() - 1
    }

    /// Number of identifiers in the chain
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Always `false`; chains hold at least the scope's own identifier
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifiers from the root down
    pub fn ids(&self) -> &[ScopeId] {
        &self.ids
    }
}

impl fmt::Display for IdChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, id) in self.ids.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{id}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_chain() {
        let chain = IdChain::root(ScopeId::new(1));
        assert_eq!(chain.to_string(), "[b]");
        assert_eq!(chain.depth(), 0);
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
        assert!(chain.parent().is_none());
    }

    #[test]
    fn test_child_appends_one_identifier() {
        let root = IdChain::root(ScopeId::new(0));
        let child = root.child(ScopeId::new(28));
        let grandchild = child.child(ScopeId::new(1));

        assert_eq!(child.to_string(), "[a-bc]");
        assert_eq!(grandchild.to_string(), "[a-bc-b]");
        assert_eq!(grandchild.len(), 3);
        assert_eq!(grandchild.id(), ScopeId::new(1));
        assert_eq!(grandchild.parent(), Some(child.clone()));
        assert_eq!(&grandchild.ids()[..2], child.ids());
    }

    #[test]
    fn test_child_leaves_parent_untouched() {
        let root = IdChain::root(ScopeId::new(0));
        let _ = root.child(ScopeId::new(5));
        assert_eq!(root.to_string(), "[a]");
    }
}
