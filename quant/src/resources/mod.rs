pub mod form;
pub mod revision;

pub use form::FormResource;
pub use revision::RevisionResource;

use regex::Regex;
use std::sync::OnceLock;
use tfcore::validator::StringPatternValidator;

/// Both resources key on a URL path, which must be absolute.
pub(crate) fn url_validator() -> &'static StringPatternValidator {
    static VALIDATOR: OnceLock<StringPatternValidator> = OnceLock::new();
    VALIDATOR.get_or_init(|| {
        StringPatternValidator::new(
            Regex::new("^/").expect("static pattern compiles"),
            "must start with '/'",
        )
    })
}
