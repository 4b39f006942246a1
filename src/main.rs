//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::{
    fs,
    io::{self, Read},
};

use huffpack::tools::cli::{opts_init, HuffOpts};
use huffpack::tools::report::{CodeReport, StreamReport};
use huffpack::{encode_with, Result};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

fn main() -> Result<()> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger was already initialized");
    }

    let opts = opts_init();

    //----- Figure out where the input comes from and go encode it
    let result = if opts.files.is_empty() {
        let mut data = vec![];
        io::stdin().read_to_end(&mut data)?;
        encode_one(&opts, "stdin", &data, opts.output.clone())
    } else {
        opts.files.iter().try_for_each(|fname| {
            let data = fs::read(fname)?;
            let target = opts
                .output
                .clone()
                .unwrap_or_else(|| format!("{}.huf", fname));
            encode_one(&opts, fname, &data, Some(target))
        })
    };

    if let Err(e) = &result {
        error!("{}", e);
    }
    info!("Done.\n");
    result
}

/// Encode one input, print its reports and write the packed bytes if there is a target.
fn encode_one(opts: &HuffOpts, name: &str, data: &[u8], target: Option<String>) -> Result<()> {
    info!("Encoding {} ({} bytes)", name, data.len());
    let enc = encode_with(data, opts)?;

    if opts.show_codes {
        print!(
            "{}",
            CodeReport {
                input: data,
                freqs: &enc.freqs,
                codes: &enc.codes,
            }
        );
    }
    if opts.show_stream {
        print!("{}", StreamReport(&enc.packed));
    }
    println!(
        "{}: {} bytes -> {} bytes ({} bits, {:.3} bits/symbol, ratio {:.3})",
        name,
        data.len(),
        enc.bytes().len(),
        enc.bit_count(),
        enc.average_code_len(),
        enc.ratio()
    );

    if let Some(path) = target {
        fs::write(&path, enc.bytes())?;
        info!("Wrote {}", path);
    }
    Ok(())
}
