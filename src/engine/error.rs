use std::fmt;
use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// The token sequence was empty, so there is no median to pick.
    #[error("no data: the token sequence is empty")]
    NoData,
}

/// Renders an I/O error as `({errno}): {description}`.
///
/// The description drops the ` (os error N)` suffix std appends, since the
/// code is already printed. Errors without an OS code print `-` in its place.
pub struct OsErrorDisplay<'a>(pub &'a io::Error);

impl fmt::Display for OsErrorDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.0.to_string();
        match self.0.raw_os_error() {
            Some(code) => {
                let suffix = format!(" (os error {})", code);
                let description = message.strip_suffix(&suffix).unwrap_or(&message);
                write!(f, "({}): {}", code, description)
            }
            None => write!(f, "(-): {}", message),
        }
    }
}
