use miette::Diagnostic;
use thiserror::Error;

use crate::AtomId;

pub type AtomResult<T> = Result<T, AtomError>;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum AtomError {
    #[error("atom `{incoming}` collides with the already interned atom `{existing}`")]
    #[diagnostic(
        code(atom::hash_collision),
        help("both strings hash to the same handle; rename one of them")
    )]
    HashCollision {
        id: AtomId,
        existing: String,
        incoming: String,
    },
}
