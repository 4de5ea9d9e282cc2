use thiserror::Error;

use super::Language;

/// Failures of the static content layer.
///
/// All of these are data integrity problems in the embedded dictionary or
/// caller mistakes; none of them depends on runtime I/O.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("content dictionary has no branch for language `{0}`")]
    MissingBranch(Language),

    #[error("embedded content file `{0}` not found")]
    MissingSource(String),

    #[error("content for `{language}` could not be parsed: {message}")]
    Parse { language: Language, message: String },

    #[error(
        "content branches `{left}` and `{right}` differ in shape (only in {left}: [{}], only in {right}: [{}])",
        .only_left.join(", "),
        .only_right.join(", ")
    )]
    ShapeMismatch {
        left: Language,
        right: Language,
        only_left: Vec<String>,
        only_right: Vec<String>,
    },

    #[error("unsupported language tag `{0}`")]
    UnsupportedLanguage(String),
}
