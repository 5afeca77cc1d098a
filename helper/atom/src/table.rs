use std::borrow::Cow;
use std::collections::hash_map::Entry;

use a11y_utils::no_hashmap_with_capacity;

use crate::errors::{AtomError, AtomResult};
use crate::{AtomId, StaticAtom};

/// Interning registry: maps every handle to the single string it stands for.
///
/// Static atoms are stored borrowed; only strings interned at runtime may
/// allocate.
#[derive(Debug)]
pub struct AtomTable<'a>(nohash_hasher::IntMap<AtomId, Cow<'a, str>>);

impl Default for AtomTable<'_> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<'a> AtomTable<'a> {
    pub fn new(capacity: usize) -> Self {
        let map = no_hashmap_with_capacity(capacity);
        Self(map)
    }

    /// Return the handle for `value`, interning it if it is not present yet.
    pub fn intern(&mut self, value: impl Into<Cow<'a, str>>) -> AtomResult<AtomId> {
        let value = value.into();
        let id = AtomId::from_str(&value);
        match self.0.entry(id) {
            Entry::Occupied(entry) => {
                if entry.get().as_ref() != value.as_ref() {
                    let err = AtomError::HashCollision {
                        id,
                        existing: entry.get().to_string(),
                        incoming: value.into_owned(),
                    };
                    tracing::error!("{err}");
                    return Err(err);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(value);
            }
        }
        Ok(id)
    }

    /// Bulk registration of a fixed array of static atoms.
    ///
    /// Handles are returned in the order of `atoms`.
    pub fn register_static<const N: usize>(
        &mut self,
        atoms: &[StaticAtom; N],
    ) -> AtomResult<[AtomId; N]> {
        self.insert_batch(atoms)?;
        Ok(std::array::from_fn(|i| atoms[i].id()))
    }

    /// Bulk registration of static atoms.
    ///
    /// The whole batch is checked before anything is inserted: on error the
    /// table is left untouched.
    pub fn register_all(&mut self, atoms: &[StaticAtom]) -> AtomResult<Vec<AtomId>> {
        self.insert_batch(atoms)?;
        Ok(atoms.iter().map(StaticAtom::id).collect())
    }

    #[tracing::instrument(level = "debug", skip_all, fields(count = atoms.len()))]
    fn insert_batch(&mut self, atoms: &[StaticAtom]) -> AtomResult<()> {
        self.check_batch(atoms)?;

        let mut fresh = 0usize;
        for atom in atoms {
            if let Entry::Vacant(entry) = self.0.entry(atom.id()) {
                entry.insert(Cow::Borrowed(atom.value()));
                fresh += 1;
            }
        }
        tracing::debug!(fresh, reused = atoms.len() - fresh, "registered static atoms");
        Ok(())
    }

    fn check_batch(&self, atoms: &[StaticAtom]) -> AtomResult<()> {
        let mut pending = no_hashmap_with_capacity::<AtomId, &str>(atoms.len());
        for atom in atoms {
            let id = atom.id();
            let existing = self
                .0
                .get(&id)
                .map(|s| s.as_ref())
                .or_else(|| pending.get(&id).copied());
            match existing {
                Some(existing) if existing != atom.value() => {
                    let err = AtomError::HashCollision {
                        id,
                        existing: existing.to_string(),
                        incoming: atom.value().to_string(),
                    };
                    tracing::error!(name = atom.name(), "{err}");
                    return Err(err);
                }
                Some(_) => {}
                None => {
                    pending.insert(id, atom.value());
                }
            }
        }
        Ok(())
    }

    /// Handle of `value` if it has been interned.
    pub fn lookup(&self, value: &str) -> Option<AtomId> {
        let id = AtomId::from_str(value);
        self.0
            .get(&id)
            .is_some_and(|s| s.as_ref() == value)
            .then_some(id)
    }

    pub fn contains(&self, atom: AtomId) -> bool {
        self.0.contains_key(&atom)
    }

    #[track_caller]
    pub fn get(&self, atom: AtomId) -> &str {
        self.try_get(atom)
            .unwrap_or_else(|| panic!("atom not found: {:?}", atom))
    }

    pub fn try_get(&self, atom: AtomId) -> Option<&str> {
        self.0.get(&atom).map(|s| s.as_ref())
    }

    pub fn eq_str(&self, atom: AtomId, s: &str) -> bool {
        self.get(atom) == s
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
