use std::{
    fmt,
    panic::Location,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use pixelcraft_font::BdfError;

/// Coarse category of an [`Error`], handed to the error hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A buffer could not be reserved.
    OutOfMemory,
    /// A file could not be opened, read or written.
    FileOpenFailed,
    /// Input data is malformed.
    InvalidFormat,
    /// Input data is well-formed but uses a variant that is not implemented.
    UnsupportedFormat,
    /// An argument is out of range.
    InvalidParameters,
    /// An internal invariant did not hold.
    InvalidState,
}

impl ErrorKind {
    /// Stable lowercase name, used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutOfMemory => "out_of_memory",
            Self::FileOpenFailed => "file_open_failed",
            Self::InvalidFormat => "invalid_format",
            Self::UnsupportedFormat => "unsupported_format",
            Self::InvalidParameters => "invalid_parameters",
            Self::InvalidState => "invalid_state",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error categories for the rendering core.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Buffer allocation failure.
    #[error("Out of memory: {0}")]
    OutOfMemory(String),

    /// File system failure while opening, reading or writing `path`.
    #[error("Failed to open {path:?}: {source}")]
    FileOpen {
        /// The file being accessed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Malformed image or font data.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Valid data in a variant that is not implemented.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Out-of-range arguments.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Broken internal invariant.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfMemory(_) => ErrorKind::OutOfMemory,
            Self::FileOpen { .. } => ErrorKind::FileOpenFailed,
            Self::InvalidFormat(_) => ErrorKind::InvalidFormat,
            Self::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Self::InvalidParameters(_) => ErrorKind::InvalidParameters,
            Self::InvalidState(_) => ErrorKind::InvalidState,
        }
    }

    /// Hands the error to the installed hook, then returns it for propagation.
    #[track_caller]
    fn reported(self) -> Self {
        let location = Location::caller();
        let message = self.to_string();
        dispatch(&ErrorReport {
            kind: self.kind(),
            message: &message,
            file: location.file(),
            line: location.line(),
        });
        self
    }

    // Allocation errors
    #[track_caller]
    pub(crate) fn out_of_memory(bytes: usize) -> Self {
        Self::OutOfMemory(format!("failed to reserve {bytes} bytes")).reported()
    }

    // File errors
    #[track_caller]
    pub(crate) fn file_open(path: &Path, source: std::io::Error) -> Self {
        Self::FileOpen { path: path.to_path_buf(), source }.reported()
    }

    // Format errors
    #[track_caller]
    pub(crate) fn invalid_format(detail: impl Into<String>) -> Self {
        Self::InvalidFormat(detail.into()).reported()
    }

    #[track_caller]
    pub(crate) fn font_parse(path: Option<&Path>, err: &BdfError) -> Self {
        let message = match path {
            Some(path) => format!("BDF font {}: {err}", path.display()),
            None => format!("BDF font: {err}"),
        };
        Self::InvalidFormat(message).reported()
    }

    #[track_caller]
    pub(crate) fn unsupported_format(detail: impl Into<String>) -> Self {
        Self::UnsupportedFormat(detail.into()).reported()
    }

    // Parameter errors
    #[track_caller]
    pub(crate) fn invalid_dimensions(width: u32, height: u32) -> Self {
        Self::InvalidParameters(format!("invalid surface dimensions {width}x{height}")).reported()
    }

    #[track_caller]
    pub(crate) fn invalid_parameters(detail: impl Into<String>) -> Self {
        Self::InvalidParameters(detail.into()).reported()
    }

    // State errors
    #[track_caller]
    pub(crate) fn invalid_state(detail: impl Into<String>) -> Self {
        Self::InvalidState(detail.into()).reported()
    }
}

/// Everything the error hook learns about a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorReport<'a> {
    /// Category of the failure
    pub kind: ErrorKind,
    /// Human readable description, identical to the error's `Display` output
    pub message: &'a str,
    /// Source file that raised the error
    pub file: &'static str,
    /// Source line that raised the error
    pub line: u32,
}

type ErrorHook = Box<dyn Fn(&ErrorReport<'_>) + Send + Sync>;

static ERROR_HOOK: RwLock<Option<ErrorHook>> = RwLock::new(None);

/// Installs a process-wide hook that sees every error before it is returned.
///
/// Replaces any previous hook. The hook runs on the failing thread while a
/// read lock is held, so it must not call [`set_error_hook`] or
/// [`clear_error_hook`] itself.
pub fn set_error_hook(hook: impl Fn(&ErrorReport<'_>) + Send + Sync + 'static) {
    *ERROR_HOOK.write().unwrap_or_else(PoisonError::into_inner) = Some(Box::new(hook));
}

/// Removes the error hook. Returns true if one was installed.
pub fn clear_error_hook() -> bool {
    ERROR_HOOK
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
        .is_some()
}

fn dispatch(report: &ErrorReport<'_>) {
    let hook = ERROR_HOOK.read().unwrap_or_else(PoisonError::into_inner);
    match hook.as_ref() {
        Some(hook) => hook(report),
        None => unhandled(report),
    }
}

fn unhandled(report: &ErrorReport<'_>) {
    tracing::error!(
        kind = %report.kind,
        file = report.file,
        line = report.line,
        "{}",
        report.message
    );

    #[cfg(feature = "abort-on-unhandled-error")]
    {
        eprintln!(
            "[{}] {}:{} {}",
            report.kind, report.file, report.line, report.message
        );
        std::process::abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let err = Error::InvalidParameters("n must be positive".into());
        assert_eq!(err.kind(), ErrorKind::InvalidParameters);
        assert_eq!(err.to_string(), "Invalid parameters: n must be positive");

        let err = Error::FileOpen {
            path: PathBuf::from("missing.bmp"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.kind(), ErrorKind::FileOpenFailed);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn kind_names() {
        assert_eq!(ErrorKind::OutOfMemory.to_string(), "out_of_memory");
        assert_eq!(ErrorKind::UnsupportedFormat.as_str(), "unsupported_format");
    }
}
