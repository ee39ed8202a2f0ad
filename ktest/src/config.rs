use crate::Result;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// program looked up on `PATH` when no explicit location is configured
pub const DEFAULT_PROGRAM: &str = "kctl";
/// host kctl connects to by default
pub const DEFAULT_HOST: &str = "localhost";
/// port kctl connects to by default
pub const DEFAULT_PORT: u16 = 8123;

/// Connection parameters and executable location shared by
/// every kctl command object.
///
/// Every field has a default, so a JSON configuration file only needs
/// to name what differs, e.g. `{"program": "/opt/kinetic/bin/kctl"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KCtlConfig {
    /// path of the kctl executable
    pub program: PathBuf,
    /// host name or IP address of the kinetic device
    pub host: String,
    /// port of the kinetic device
    pub port: u16,
    /// user id passed with `-u`
    pub user: Option<i64>,
    /// HMAC key passed with `-m`
    pub hmac_key: Option<String>,
    /// connect over TLS (`-s`)
    pub tls: bool,
    /// client cluster version passed with `-c`
    pub cluster_version: Option<i64>,
    /// quiet output (`-q`)
    pub quiet: bool,
    /// terse output (`-t`)
    pub terse: bool,
    /// verbose output (`-v`)
    pub verbose: bool,
    /// answer yes to every prompt (`-y`). `del` asks for confirmation
    /// on stdin without it.
    pub yes: bool,
}

impl Default for KCtlConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            user: None,
            hmac_key: None,
            tls: false,
            cluster_version: None,
            quiet: false,
            terse: false,
            verbose: false,
            yes: false,
        }
    }
}

impl KCtlConfig {
    /// read a configuration from a JSON file, missing fields take
    /// their default values
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// replace the executable location
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// replace the host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// replace the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// answer kctl's prompts with yes, needed for unattended deletes
    pub fn assume_yes(mut self) -> Self {
        self.yes = true;
        self
    }

    /// the common options that precede the sub-command.
    /// Host and port are always present, the rest only when set.
    pub(crate) fn common_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-h".into(),
            self.host.clone().into(),
            "-p".into(),
            self.port.to_string().into(),
        ];

        if let Some(user) = self.user {
            args.push("-u".into());
            args.push(user.to_string().into());
        }
        if let Some(hmac_key) = &self.hmac_key {
            args.push("-m".into());
            args.push(hmac_key.clone().into());
        }
        if self.tls {
            args.push("-s".into());
        }
        if let Some(version) = self.cluster_version {
            args.push("-c".into());
            args.push(version.to_string().into());
        }

        let switches = [
            (self.quiet, "-q"),
            (self.terse, "-t"),
            (self.verbose, "-v"),
            (self.yes, "-y"),
        ];
        for (set, flag) in switches.iter() {
            if *set {
                args.push(OsString::from(*flag));
            }
        }

        args
    }
}
