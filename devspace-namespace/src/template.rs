//! Placeholder substitution for configured namespace name templates.

use once_cell::sync::Lazy;
use regex::Regex;

use devspace_core::Subject;

/// A name containing any `<...>` token is a naming pattern, not an actual
/// namespace.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new("<.+>").expect("placeholder pattern is valid")
});

pub const USER_ID_PLACEHOLDER: &str = "<userid>";
pub const USER_NAME_PLACEHOLDER: &str = "<username>";

pub fn contains_placeholder(name: &str) -> bool {
    PLACEHOLDER.is_match(name)
}

/// Replaces every occurrence of each recognized placeholder with the
/// corresponding value from `subject`. Unrecognized `<...>` tokens are left
/// as-is; it is the caller's responsibility to supply all needed context.
pub fn eval_placeholders(template: &str, subject: &Subject) -> String {
    template
        .replace(USER_ID_PLACEHOLDER, &subject.user_id)
        .replace(USER_NAME_PLACEHOLDER, &subject.user_name)
}
