//! Guild-scoped vocabulary.

mod permissions;

pub use self::permissions::Permissions;
