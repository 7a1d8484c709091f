//! `genlist-demo`: exercises the sequence container from the command line.
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`.

mod demo;

use clap::{Parser, Subcommand};
use genlist_core::logger::init_logging;
use std::io::{self, BufWriter};

pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Parser)]
#[command(name = "genlist-demo", version, about = "GenList demonstration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Copy mode: store each stdin line as a fixed-size record, then print them.
    Strings {
        /// Size of one record in bytes, including the terminating NUL.
        #[arg(long, env = "GENLIST_ITEM_SIZE", default_value_t = demo::DEFAULT_RECORD_SIZE)]
        item_size: usize,
    },
    /// Reference mode: store pointers to caller-owned strings read from stdin.
    Pointers,
    /// Add many large items in either mode.
    Bulk {
        /// Number of items to add.
        #[arg(long, env = "GENLIST_COUNT", default_value_t = 10_000)]
        count: usize,
        /// Size of each item in bytes.
        #[arg(long, env = "GENLIST_SIZE", default_value_t = 10_240)]
        size: usize,
        /// Store references to caller-owned buffers instead of copies.
        #[arg(long)]
        reference: bool,
    },
    /// Positional inserts on a list of integers.
    Insert,
}

fn main() -> Result<(), DynError> {
    init_logging("genlist-demo");
    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    let stdin = io::stdin().lock();
    let mut out = BufWriter::new(io::stdout().lock());
    match cli.command {
        Command::Strings { item_size } => demo::strings(item_size, stdin, &mut out),
        Command::Pointers => demo::pointers(stdin, &mut out),
        Command::Bulk {
            count,
            size,
            reference,
        } => demo::bulk(count, size, reference, &mut out),
        Command::Insert => demo::insert(&mut out),
    }
}
