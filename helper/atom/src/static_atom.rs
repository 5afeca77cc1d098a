use crate::AtomId;

/// A compile-time `(name, value)` pair together with the handle its value
/// interns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAtom {
    name: &'static str,
    value: &'static str,
    id: AtomId,
}

impl StaticAtom {
    pub const fn new(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            value,
            id: AtomId::from_str(value),
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn value(&self) -> &'static str {
        self.value
    }

    #[inline]
    pub const fn id(&self) -> AtomId {
        self.id
    }
}
