use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating raw state codes
    /// Exactly two ASCII letters, either case
    /// - Valid: "LA", "fc", "Kn"
    /// - Invalid: "L", "LAG", "L1", " LA", ""
    pub static ref STATE_CODE_REGEX: Regex = Regex::new(r"^[A-Za-z]{2}$").unwrap();
}
