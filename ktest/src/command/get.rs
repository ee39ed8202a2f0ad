use super::{KCtlCommand, SubCommand};
use crate::{FormatRegistry, KCtlConfig, KtestErrorKind, PrintFormat, Result};
use std::ffi::OsString;

/// The four lookups kctl serves through the same handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetKind {
    /// the key itself
    Get,
    /// the key after the given one
    Next,
    /// the key before the given one
    Prev,
    /// the version of the key
    Version,
}

impl Default for GetKind {
    fn default() -> Self {
        GetKind::Get
    }
}

impl From<GetKind> for SubCommand {
    fn from(kind: GetKind) -> SubCommand {
        match kind {
            GetKind::Get => SubCommand::Get,
            GetKind::Next => SubCommand::GetNext,
            GetKind::Prev => SubCommand::GetPrev,
            GetKind::Version => SubCommand::GetVers,
        }
    }
}

/// `kctl get KEY` and its next/prev/version siblings.
///
/// The print format is resolved when the command is built, so an
/// unknown format name never reaches kctl.
#[derive(Debug, Clone)]
pub struct GetCommand {
    config: KCtlConfig,
    kind: GetKind,
    format: Option<PrintFormat>,
}

impl GetCommand {
    /// a plain `get`, `None` keeps kctl's raw string output
    pub fn new(config: KCtlConfig, format: Option<PrintFormat>) -> Self {
        Self {
            config,
            kind: GetKind::Get,
            format,
        }
    }

    /// like `new` but looks the format up by name and fails
    /// with `UnknownFormat` if the registry does not have it
    pub fn with_format_name(config: KCtlConfig, format: Option<&str>) -> Result<Self> {
        let format = match format {
            Some(name) => {
                Some(FormatRegistry::resolve(name).ok_or(KtestErrorKind::UnknownFormat)?)
            }
            None => None,
        };
        Ok(Self::new(config, format))
    }

    /// switch to getnext, getprev or getvers
    pub fn with_kind(mut self, kind: GetKind) -> Self {
        self.kind = kind;
        self
    }

    /// which lookup this command performs
    pub fn kind(&self) -> GetKind {
        self.kind
    }

    /// the resolved print format
    pub fn format(&self) -> Option<PrintFormat> {
        self.format
    }
}

impl KCtlCommand for GetCommand {
    fn config(&self) -> &KCtlConfig {
        &self.config
    }

    fn sub_command(&self) -> SubCommand {
        self.kind.into()
    }

    fn options(&self) -> Vec<OsString> {
        let flag = FormatRegistry::flag_for(self.format);
        if flag.is_empty() {
            vec![]
        } else {
            vec![flag.into()]
        }
    }
}
