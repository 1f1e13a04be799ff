//! Per-kind lookup tables.

use addingen_core::FunctionTag;

/// One value per function kind, looked up by [`FunctionTag`].
///
/// Generators keep their per-kind template names and flags in tables like
/// this instead of branching on the kind at every use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagTable<T> {
    pub constructor: T,
    pub member: T,
    pub enumeration_member: T,
    pub procedure: T,
}

impl<T> TagTable<T> {
    /// Get the entry for a kind.
    pub const fn get(&self, tag: FunctionTag) -> &T {
        match tag {
            FunctionTag::Constructor => &self.constructor,
            FunctionTag::Member => &self.member,
            FunctionTag::EnumerationMember => &self.enumeration_member,
            FunctionTag::Procedure => &self.procedure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATES: TagTable<&str> = TagTable {
        constructor: "body.constructor",
        member: "body.member",
        enumeration_member: "body.member",
        procedure: "body.procedure",
    };

    #[test]
    fn test_lookup() {
        assert_eq!(*TEMPLATES.get(FunctionTag::Constructor), "body.constructor");
        assert_eq!(*TEMPLATES.get(FunctionTag::EnumerationMember), "body.member");
        assert_eq!(*TEMPLATES.get(FunctionTag::Procedure), "body.procedure");
    }
}
