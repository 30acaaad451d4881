mod args;
mod cli;
mod error;
mod fields;
mod import;
mod record;
mod session;
mod store;
mod terminal;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    let args = args::parse();
    cli::main(args)
}
