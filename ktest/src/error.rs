use failure::{Backtrace, Context, Fail};
use std::fmt;
use std::io;

/// Error Type for the kctl test harness
#[derive(Debug)]
pub struct KtestError {
    inner: Context<KtestErrorKind>,
}

/// Kinds of possible Errors raised by the harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Fail)]
pub enum KtestErrorKind {
    /// A print format name that the format registry does not know
    #[fail(display = "Unknown print format")]
    UnknownFormat,
    /// A sub-command name that kctl does not accept
    #[fail(display = "Unknown kctl sub-command")]
    UnknownSubCommand,
    /// The kctl process could not be started at all
    #[fail(display = "Cannot spawn kctl process")]
    Spawn,
    /// IoError triggered by reading configuration files
    #[fail(display = "Io Error")]
    IoError,
    /// Serialization/Deserialization Error triggered by serde
    #[fail(display = "Json parsing error")]
    JsonError,
    /// A command option that kctl would reject before doing anything
    #[fail(display = "Invalid command argument")]
    InvalidArgument,
}

impl KtestError {
    /// get the kind of the error
    pub fn kind(&self) -> KtestErrorKind {
        *self.inner.get_context()
    }

    /// the operating system error underneath, if there is one.
    /// A failed spawn carries the `io::Error` reported by the OS untouched.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.inner
            .cause()
            .and_then(|cause| cause.downcast_ref::<io::Error>())
    }

    pub(crate) fn spawn(error: io::Error) -> KtestError {
        error.context(KtestErrorKind::Spawn).into()
    }
}

impl Fail for KtestError {
    fn cause(&self) -> Option<&dyn Fail> {
        self.inner.cause()
    }

    fn backtrace(&self) -> Option<&Backtrace> {
        self.inner.backtrace()
    }
}

impl fmt::Display for KtestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl From<KtestErrorKind> for KtestError {
    fn from(kind: KtestErrorKind) -> KtestError {
        KtestError {
            inner: Context::new(kind),
        }
    }
}

impl From<Context<KtestErrorKind>> for KtestError {
    fn from(context: Context<KtestErrorKind>) -> KtestError {
        KtestError { inner: context }
    }
}

impl From<io::Error> for KtestError {
    fn from(error: io::Error) -> KtestError {
        error.context(KtestErrorKind::IoError).into()
    }
}

impl From<serde_json::Error> for KtestError {
    fn from(error: serde_json::Error) -> KtestError {
        error.context(KtestErrorKind::JsonError).into()
    }
}
