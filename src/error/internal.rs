use thiserror::Error;

/// Internal issues indicating unexpected data or possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A configured emoji string is neither a unicode emoji nor `<:name:id>`.
    #[error("Invalid emoji '{0}'")]
    InvalidEmoji(String),
}
