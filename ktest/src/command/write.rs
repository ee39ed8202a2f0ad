use super::{KCtlCommand, RangeBound, SubCommand};
use crate::{KCtlConfig, KtestError, KtestErrorKind};
use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

/// How the device persists a mutation, kctl's `-p` option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// `wt`
    WriteThrough,
    /// `wb`, the device default
    WriteBack,
    /// `f`
    Flush,
}

impl CachePolicy {
    /// argument kctl expects after `-p`
    pub fn arg(self) -> &'static str {
        match self {
            CachePolicy::WriteThrough => "wt",
            CachePolicy::WriteBack => "wb",
            CachePolicy::Flush => "f",
        }
    }
}

impl fmt::Display for CachePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.arg())
    }
}

impl FromStr for CachePolicy {
    type Err = KtestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wt" => Ok(CachePolicy::WriteThrough),
            "wb" => Ok(CachePolicy::WriteBack),
            "f" => Ok(CachePolicy::Flush),
            _ => Err(KtestErrorKind::InvalidArgument.into()),
        }
    }
}

fn push_policy(options: &mut Vec<OsString>, policy: Option<CachePolicy>) {
    if let Some(policy) = policy {
        options.push("-p".into());
        options.push(policy.arg().into());
    }
}

/// `kctl put KEY VALUE`, or `kctl put -z LEN KEY` for a zero-filled value
#[derive(Debug, Clone)]
pub struct PutCommand {
    config: KCtlConfig,
    compare_and_swap: bool,
    policy: Option<CachePolicy>,
    checksum: Option<u32>,
    zero_fill: Option<u32>,
}

impl PutCommand {
    /// a put with every option at kctl's default
    pub fn new(config: KCtlConfig) -> Self {
        Self {
            config,
            compare_and_swap: false,
            policy: None,
            checksum: None,
            zero_fill: None,
        }
    }

    /// only replace the value if the stored version matches (`-c`)
    pub fn compare_and_swap(mut self) -> Self {
        self.compare_and_swap = true;
        self
    }

    /// persist with the given cache policy (`-p`)
    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// CRC32 of the value (`-s`), sent as 8 hex digits
    pub fn with_checksum(mut self, sum: u32) -> Self {
        self.checksum = Some(sum);
        self
    }

    /// store `len` zero bytes instead of a value argument (`-z`);
    /// only the key is passed positionally then
    pub fn zero_filled(mut self, len: u32) -> Self {
        self.zero_fill = Some(len);
        self
    }
}

impl KCtlCommand for PutCommand {
    fn config(&self) -> &KCtlConfig {
        &self.config
    }

    fn sub_command(&self) -> SubCommand {
        SubCommand::Put
    }

    fn options(&self) -> Vec<OsString> {
        let mut options: Vec<OsString> = vec![];
        if self.compare_and_swap {
            options.push("-c".into());
        }
        push_policy(&mut options, self.policy);
        if let Some(sum) = self.checksum {
            options.push("-s".into());
            options.push(format!("{:08x}", sum).into());
        }
        if let Some(len) = self.zero_fill {
            options.push("-z".into());
            options.push(len.to_string().into());
        }
        options
    }
}

/// Keys a `del` range covers. kctl rejects a count of 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelRange {
    start: Option<RangeBound>,
    end: Option<RangeBound>,
    count: Option<u32>,
}

impl DelRange {
    /// every key, unless narrowed by bounds or a count
    pub fn new() -> Self {
        Self::default()
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

    /// delete at most `count` keys
    pub fn with_count(mut self, count: u32) -> Result<Self, KtestError> {
        if count == 0 {
            return Err(KtestErrorKind::InvalidArgument.into());
        }
        self.count = Some(count);
        Ok(self)
    }
}

/// What a `del` removes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelTarget {
    /// the key passed positionally
    Key,
    /// the keys in a range, no positional key
    Range(DelRange),
    /// every key on the device (`-a`)
    All,
}

/// `kctl del KEY`, `kctl del [-n count] [-s|-S KEY] [-e|-E KEY]` or `kctl del -a`.
///
/// kctl asks for confirmation on stdin before deleting, so unattended
/// runs need [`KCtlConfig::assume_yes`].
#[derive(Debug, Clone)]
pub struct DelCommand {
    config: KCtlConfig,
    target: DelTarget,
    compare: bool,
    policy: Option<CachePolicy>,
}

impl DelCommand {
    /// delete a single key, every option at kctl's default
    pub fn new(config: KCtlConfig) -> Self {
        Self {
            config,
            target: DelTarget::Key,
            compare: false,
            policy: None,
        }
    }

    /// delete the keys in `range`
    pub fn range(config: KCtlConfig, range: DelRange) -> Self {
        Self {
            target: DelTarget::Range(range),
            ..Self::new(config)
        }
    }

    /// delete every key
    pub fn all(config: KCtlConfig) -> Self {
        Self {
            target: DelTarget::All,
            ..Self::new(config)
        }
    }

    /// what this command removes
    pub fn target(&self) -> &DelTarget {
        &self.target
    }

    /// only delete if the stored version matches (`-c`)
    pub fn compare_and_delete(mut self) -> Self {
        self.compare = true;
        self
    }

    /// persist with the given cache policy (`-p`)
    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = Some(policy);
        self
    }
}

impl KCtlCommand for DelCommand {
    fn config(&self) -> &KCtlConfig {
        &self.config
    }

    fn sub_command(&self) -> SubCommand {
        SubCommand::Del
    }

    fn options(&self) -> Vec<OsString> {
        let mut options: Vec<OsString> = vec![];
        if self.compare {
            options.push("-c".into());
        }
        push_policy(&mut options, self.policy);
        match &self.target {
            DelTarget::Key => {}
            DelTarget::Range(range) => {
                if let Some(count) = range.count {
                    options.push("-n".into());
                    options.push(count.to_string().into());
                }
                if let Some(start) = &range.start {
                    start.push_to(&mut options, 's');
                }
                if let Some(end) = &range.end {
                    end.push_to(&mut options, 'e');
                }
            }
            DelTarget::All => options.push("-a".into()),
        }
        options
    }
}
