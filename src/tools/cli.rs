use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, warn};

use crate::huffman_coding::heap::TieBreak;

/// Default counting window, in bytes.
pub const DEFAULT_CHUNK: usize = 1000;

/// Verbosity of user information
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}
impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Clone, Debug)]
pub struct HuffOpts {
    /// Vec of names of files to read for input
    pub files: Vec<String>,
    /// Where to write the packed bytes. Defaults to <file>.huf
    pub output: Option<String>,
    /// Add an end-of-stream symbol to the code and the stream
    pub sentinel: bool,
    /// How equal weights are ordered while building the tree
    pub tie_break: TieBreak,
    /// Window size used while counting frequencies
    pub chunk_size: usize,
    /// Print the code table
    pub show_codes: bool,
    /// Print the packed stream
    pub show_stream: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            output: None,
            sentinel: false,
            tie_break: TieBreak::Symbol,
            chunk_size: DEFAULT_CHUNK,
            show_codes: true,
            show_stream: false,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman encode files into a packed bitstream",
    long_about = "
    Counts the bytes of each input, builds a minimum-redundancy prefix code from the counts,
    prints the code table and packs the input into a bitstream using those codes.

    The packed bytes are written to <file>.huf unless --output is given."
)]
pub struct Args {
    /// Files to encode. Reads standard input when none are given
    #[clap()]
    files: Vec<String>,

    /// Write the packed bytes here instead of <file>.huf
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Add an end-of-stream symbol to the code and the stream
    #[clap(short = 'e', long = "eos")]
    eos: bool,

    /// Break weight ties by heap order only, ignoring symbol values
    #[clap(long = "weight-only")]
    weight_only: bool,

    /// Bytes counted per window while building the frequency table
    #[clap(short = 'c', long = "chunk", default_value_t = DEFAULT_CHUNK)]
    chunk: usize,

    /// Don't print the code table
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Print the packed stream
    #[clap(short = 's', long = "stream")]
    stream: bool,

    /// Sets verbosity. -v shows progress, -vvv is chatty
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    v: u8,

    /// Log less. --silent keeps errors only, --silent --silent logs nothing
    #[clap(long = "silent", action = clap::ArgAction::Count, conflicts_with = "v")]
    silent: u8,
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let mut opts = HuffOpts::new();
        opts.files = args.files;
        if args.output.is_some() && opts.files.len() > 1 {
            warn!(
                "--output needs a single input, writing each of {} files to <file>.huf",
                opts.files.len()
            );
        } else {
            opts.output = args.output;
        }
        opts.sentinel = args.eos;
        if args.weight_only {
            opts.tie_break = TieBreak::WeightOnly;
        }
        if args.chunk == 0 {
            warn!("Chunk size 0 is not usable, counting with {}", DEFAULT_CHUNK);
        } else {
            opts.chunk_size = args.chunk;
        }
        opts.show_codes = !args.quiet;
        opts.show_stream = args.stream;
        opts.verbose = match (args.silent, args.v) {
            (1, _) => Verbosity::Errors,
            (s, _) if s > 1 => Verbosity::Quiet,
            (_, 0) => Verbosity::Warnings,
            (_, 1) => Verbosity::Info,
            (_, 2) => Verbosity::Debug,
            _ => Verbosity::Trace,
        };
        opts
    }
}

/// Set the log level
pub fn set_log_level(verbose: Verbosity) {
    match verbose {
        Verbosity::Quiet => log::set_max_level(log::LevelFilter::Off),
        Verbosity::Errors => log::set_max_level(log::LevelFilter::Error),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };
}

/// Parse the command line into options and set the log level from them.
pub fn opts_init() -> HuffOpts {
    let opts = HuffOpts::from(Args::parse());
    set_log_level(opts.verbose);

    // Below we report initialization status to the user
    info!("---- Huffpack Initialization Start ----");
    info!("Verbosity set to {}", opts.verbose);
    if opts.files.is_empty() {
        info!("Getting input from stdin");
    } else {
        info!("Getting input from {:?}", opts.files);
    }
    if opts.sentinel {
        info!("Adding an end-of-stream symbol");
    }
    info!("Tie break set to {:?}", opts.tie_break);
    info!("Chunk size set to {}", opts.chunk_size);
    info!("---- Huffpack Initialization End ----\n");
    opts
}
