use clap::Parser;
use ktest::{time_runs, GetCommand, GetKind, KCtlCommand, KCtlConfig, PrintFormat};
use std::path::PathBuf;
use std::process::exit;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(help = "The key to get")]
    #[clap(default_value = "pak")]
    key: String,

    #[clap(long)]
    #[clap(help = "JSON file with connection settings")]
    config: Option<PathBuf>,

    #[clap(long)]
    #[clap(help = "Path of the kctl executable")]
    program: Option<PathBuf>,

    #[clap(long)]
    #[clap(help = "Host of the kinetic device")]
    host: Option<String>,

    #[clap(long)]
    #[clap(help = "Port of the kinetic device")]
    port: Option<u16>,

    #[clap(long, default_value = "chars")]
    #[clap(help = "Print format: chars, hex or plain")]
    format: String,

    #[clap(long, default_value_t = Op::Get)]
    #[clap(help = "Lookup to time: get, getnext, getprev or getvers")]
    op: Op,

    #[clap(long, default_value_t = 1000)]
    #[clap(help = "Number of runs to average over")]
    iterations: u32,

    #[clap(long)]
    #[clap(help = "Run once and print what kctl wrote instead of timing")]
    show: bool,

    #[clap(short, long)]
    #[clap(help = "Log every spawned command")]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Op {
    Get,
    Next,
    Prev,
    Vers,
}

impl std::str::FromStr for Op {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Self::Get),
            "getnext" => Ok(Self::Next),
            "getprev" => Ok(Self::Prev),
            "getvers" => Ok(Self::Vers),
            _ => Err(Self::Err::from("Unsupported get operation")),
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Get => write!(f, "get"),
            Self::Next => write!(f, "getnext"),
            Self::Prev => write!(f, "getprev"),
            Self::Vers => write!(f, "getvers"),
        }
    }
}

impl From<Op> for GetKind {
    fn from(op: Op) -> GetKind {
        match op {
            Op::Get => GetKind::Get,
            Op::Next => GetKind::Next,
            Op::Prev => GetKind::Prev,
            Op::Vers => GetKind::Version,
        }
    }
}

fn main() {
    let args = Args::parse();

    // set log collector
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        }
    };
    info!(program = %config.program.display(), host = %config.host, port = config.port, "kctl configured");

    let format = if args.format == "plain" {
        None
    } else {
        match args.format.parse::<PrintFormat>() {
            Ok(format) => Some(format),
            Err(error) => {
                eprintln!("{}: {}", error, args.format);
                exit(2);
            }
        }
    };

    let command = GetCommand::new(config, format).with_kind(args.op.into());
    let key = args.key.as_str();

    if args.show {
        match command.run(&[key], true) {
            Ok(result) => {
                print!("{}", result.stdout().unwrap_or_default());
                eprint!("{}", result.stderr().unwrap_or_default());
                exit(result.code().unwrap_or(1));
            }
            Err(error) => {
                eprintln!("{}", error);
                exit(1);
            }
        }
    }

    match time_runs(&command, &[key], args.iterations) {
        Ok(report) => {
            println!("Get {:?} runs in {}", key, report);
            if report.failures > 0 {
                eprintln!("{} of {} runs failed", report.failures, report.iterations);
            }
        }
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        }
    }
}

fn load_config(args: &Args) -> ktest::Result<KCtlConfig> {
    let mut config = match &args.config {
        Some(path) => KCtlConfig::from_json_file(path)?,
        None => KCtlConfig::default(),
    };

    if let Some(program) = &args.program {
        config = config.with_program(program);
    }
    if let Some(host) = &args.host {
        config = config.with_host(host.as_str());
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }

    Ok(config)
}
