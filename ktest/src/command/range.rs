use super::{KCtlCommand, SubCommand};
use crate::{FormatRegistry, KCtlConfig, KtestErrorKind, PrintFormat, Result};
use std::ffi::OsString;

/// One end of a key range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeBound {
    /// the key itself is part of the range
    Inclusive(String),
    /// the key itself is left out
    Exclusive(String),
}

impl RangeBound {
    // kctl spells inclusive bounds with the capital letter
    pub(super) fn push_to(&self, options: &mut Vec<OsString>, flag: char) {
        let (flag, key) = match self {
            RangeBound::Inclusive(key) => (flag.to_ascii_uppercase(), key),
            RangeBound::Exclusive(key) => (flag, key),
        };
        options.push(format!("-{}", flag).into());
        options.push(key.into());
    }
}

/// `kctl range`, lists keys between two optional bounds.
/// Takes no positional arguments.
#[derive(Debug, Clone)]
pub struct RangeCommand {
    config: KCtlConfig,
    start: Option<RangeBound>,
    end: Option<RangeBound>,
    count: Option<u32>,
    reverse: bool,
    format: Option<PrintFormat>,
}

impl RangeCommand {
    /// every key on the device, printed as raw strings
    pub fn new(config: KCtlConfig) -> Self {
        Self {
            config,
            start: None,
            end: None,
            count: None,
            reverse: false,
            format: None,
        }
    }

    /// lower bound of the range
    pub fn with_start(mut self, start: RangeBound) -> Self {
        self.start = Some(start);
        self
    }

    /// upper bound of the range
    pub fn with_end(mut self, end: RangeBound) -> Self {
        self.end = Some(end);
        self
    }

    /// list at most `count` keys, kctl refuses a count of 0
    pub fn with_count(mut self, count: u32) -> Result<Self> {
        if count == 0 {
            return Err(KtestErrorKind::InvalidArgument.into());
        }
        self.count = Some(count);
        Ok(self)
    }

    /// walk the range from the end
    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// how keys are printed
    pub fn with_format(mut self, format: PrintFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl KCtlCommand for RangeCommand {
    fn config(&self) -> &KCtlConfig {
        &self.config
    }

    fn sub_command(&self) -> SubCommand {
        SubCommand::Range
    }

    fn options(&self) -> Vec<OsString> {
        let mut options: Vec<OsString> = vec![];
        if let Some(count) = self.count {
            options.push("-n".into());
            options.push(count.to_string().into());
        }
        if let Some(start) = &self.start {
            start.push_to(&mut options, 's');
        }
        if let Some(end) = &self.end {
            end.push_to(&mut options, 'e');
        }
        if self.reverse {
            options.push("-r".into());
        }
        let flag = FormatRegistry::flag_for(self.format);
        if !flag.is_empty() {
            options.push(flag.into());
        }
        options
    }
}
