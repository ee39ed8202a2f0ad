use crate::{KtestError, KtestErrorKind};
use std::fmt;
use std::str::FromStr;

/// Output rendering modes kctl supports for keys and values.
/// Plain raw-string output is the absence of a format, see
/// [`FormatRegistry::flag_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrintFormat {
    /// ascii with escape sequences, `-A`
    Chars,
    /// hex and ascii dump, `-X`
    Hex,
}

impl PrintFormat {
    /// every known format, in registry order
    pub const ALL: [PrintFormat; 2] = [PrintFormat::Chars, PrintFormat::Hex];

    /// human readable name of the format
    pub fn name(self) -> &'static str {
        match self {
            PrintFormat::Chars => "chars",
            PrintFormat::Hex => "hex",
        }
    }

    /// command-line flag kctl expects for the format
    pub fn flag(self) -> &'static str {
        match self {
            PrintFormat::Chars => "-A",
            PrintFormat::Hex => "-X",
        }
    }
}

impl fmt::Display for PrintFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrintFormat {
    type Err = KtestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatRegistry::resolve(s).ok_or_else(|| KtestErrorKind::UnknownFormat.into())
    }
}

/// Stateless lookup between format names, format values
/// and the flags handed to kctl
pub struct FormatRegistry;

impl FormatRegistry {
    /// find the format with the given name, `None` if no format has it
    pub fn resolve(name: &str) -> Option<PrintFormat> {
        PrintFormat::ALL
            .iter()
            .copied()
            .find(|format| format.name() == name)
    }

    /// the flag for a format, or the empty string when no
    /// format is selected and kctl prints raw strings
    pub fn flag_for(format: Option<PrintFormat>) -> &'static str {
        format.map(PrintFormat::flag).unwrap_or("")
    }
}
