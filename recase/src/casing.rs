//! Extension trait for string types

use crate::case::Case;

/// Case conversion methods on anything that can be viewed as `str`
///
/// ```
/// use recase::{Case, Casing};
///
/// assert_eq!("user_id".to_case(Case::Pascal), "UserId");
/// assert!(String::from("user-id").is_case(Case::Kebab));
/// ```
pub trait Casing {
    /// Convert to `case` with default options
    fn to_case(&self, case: Case) -> String;

    /// True when non-empty and already written in `case`
    fn is_case(&self, case: Case) -> bool;
}

impl<T: AsRef<str> + ?Sized> Casing for T {
    fn to_case(&self, case: Case) -> String {
        case.apply(self.as_ref())
    }

    fn is_case(&self, case: Case) -> bool {
        case.is_case(self.as_ref())
    }
}
