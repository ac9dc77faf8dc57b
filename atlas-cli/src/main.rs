use anyhow::Result;
use clap::Command;

mod cmd;
mod config;

fn main() -> Result<()> {
    let matches = Command::new("atlas")
        .about("Inspect, validate, and export docs-site descriptors")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::check::make_subcommand())
        .subcommand(cmd::export::make_subcommand())
        .subcommand(cmd::outline::make_subcommand())
        .get_matches();

    match matches.subcommand() {
        Some(("check", args)) => cmd::check::execute(args),
        Some(("export", args)) => cmd::export::execute(args),
        Some(("outline", args)) => cmd::outline::execute(args),
        _ => unreachable!("subcommand is required"),
    }
}
