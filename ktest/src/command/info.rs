use super::{KCtlCommand, SubCommand};
use crate::KCtlConfig;
use std::ffi::OsString;

/// Parts of the device log `kctl info` can print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoSection {
    /// everything, kctl's default
    All,
    /// configuration
    Configuration,
    /// capacities
    Capacities,
    /// limits
    Limits,
    /// configuration, capacities, limits, stats, temperatures and utilizations
    Most,
    /// device messages, can be large
    Messages,
    /// operation statistics
    Statistics,
    /// temperatures
    Temperatures,
    /// utilizations
    Utilizations,
}

impl InfoSection {
    /// flag selecting the section
    pub fn flag(self) -> &'static str {
        match self {
            InfoSection::All => "-a",
            InfoSection::Configuration => "-c",
            InfoSection::Capacities => "-C",
            InfoSection::Limits => "-L",
            InfoSection::Most => "-m",
            InfoSection::Messages => "-M",
            InfoSection::Statistics => "-O",
            InfoSection::Temperatures => "-T",
            InfoSection::Utilizations => "-U",
        }
    }
}

/// `kctl info`
#[derive(Debug, Clone)]
pub struct InfoCommand {
    config: KCtlConfig,
    sections: Vec<InfoSection>,
}

impl InfoCommand {
    /// with no section selected kctl prints everything
    pub fn new(config: KCtlConfig) -> Self {
        Self {
            config,
            sections: vec![],
        }
    }

    /// add a section to print, each section is passed once
    pub fn with_section(mut self, section: InfoSection) -> Self {
        if !self.sections.contains(&section) {
            self.sections.push(section);
        }
        self
    }
}

impl KCtlCommand for InfoCommand {
    fn config(&self) -> &KCtlConfig {
        &self.config
    }

    fn sub_command(&self) -> SubCommand {
        SubCommand::Info
    }

    fn options(&self) -> Vec<OsString> {
        self.sections
            .iter()
            .map(|section| OsString::from(section.flag()))
            .collect()
    }
}
