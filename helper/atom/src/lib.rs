mod errors;
mod static_atom;
mod table;

pub use errors::{AtomError, AtomResult};
pub use static_atom::StaticAtom;
pub use table::AtomTable;

/// Interned handle of a string.
///
/// The handle is derived from the string content, so equal strings always
/// produce equal handles no matter which table, or in which order, they
/// were interned.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct AtomId(u64);

impl AtomId {
    pub const fn from_str(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }

    pub const fn from_bytes(bytes: &[u8]) -> Self {
        use xxhash_rust::const_xxh3::xxh3_64;
        Self(xxh3_64(bytes))
    }
}

impl nohash_hasher::IsEnabled for AtomId {}

/// Declare a fixed set of atoms and the context object that binds them.
///
/// Each group becomes a `const` slice of [`StaticAtom`]s, the full list is
/// emitted as one array in declaration order, and the struct gets one
/// [`AtomId`] field per atom, filled by a single bulk registration.
///
/// ```
/// use a11y_atom::{static_atoms, AtomTable};
///
/// static_atoms! {
///     pub struct Greek;
///     const GREEK_ATOMS;
///     LETTERS: {
///         alpha: "alpha",
///         beta: "beta",
///     },
/// }
///
/// let mut table = AtomTable::default();
/// let greek = Greek::initialize(&mut table);
/// assert_eq!(Greek::LEN, 2);
/// assert_eq!(table.get(greek.alpha), "alpha");
/// assert_eq!(greek.get("beta"), Some(greek.beta));
/// ```
#[macro_export]
macro_rules! static_atoms {
    (
        $(#[$meta:meta])*
        $vis:vis struct $registry:ident;
        const $all:ident;
        $(
            $(#[$group_meta:meta])*
            $group:ident: {
                $( $name:ident: $lit:literal ),* $(,)?
            },
        )+
    ) => {
        $(
            $(#[$group_meta])*
            $vis const $group: &[$crate::StaticAtom] = &[
                $( $crate::StaticAtom::new(stringify!($name), $lit), )*
            ];
        )+

        $vis const $all: &[$crate::StaticAtom; $registry::LEN] = &[
            $( $( $crate::StaticAtom::new(stringify!($name), $lit), )* )+
        ];

        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $registry {
            $( $( pub $name: $crate::AtomId, )* )+
        }

        impl $registry {
            pub const LEN: usize = [$( $( stringify!($name), )* )+].len();

            /// Register every declared atom into `table` and bind the handles.
            ///
            /// Registration failure is fatal.
            #[track_caller]
            pub fn initialize(table: &mut $crate::AtomTable<'_>) -> Self {
                match Self::try_initialize(table) {
                    Ok(atoms) => atoms,
                    Err(err) => panic!("failed to register `{}`: {err}", stringify!($registry)),
                }
            }

            pub fn try_initialize(
                table: &mut $crate::AtomTable<'_>,
            ) -> Result<Self, $crate::AtomError> {
                let [$( $( $name, )* )+] = table.register_static($all)?;
                Ok(Self { $( $( $name, )* )+ })
            }

            pub fn get(&self, name: &str) -> Option<$crate::AtomId> {
                match name {
                    $( $( stringify!($name) => Some(self.$name), )* )+
                    _ => None,
                }
            }

            pub fn ids(&self) -> [$crate::AtomId; $registry::LEN] {
                [$( $( self.$name, )* )+]
            }

            pub fn iter(
                &self,
            ) -> impl Iterator<Item = (&'static $crate::StaticAtom, $crate::AtomId)> {
                $all.iter().zip(self.ids())
            }
        }
    };
}
