use anyhow::Result;
use atlas_core::SiteDescriptor;
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::cmd::add_descriptor_args;
use crate::config::AtlasConfig;

pub fn make_subcommand() -> Command {
    add_descriptor_args(Command::new("export"))
        .about("Export a site descriptor as JSON for the host generator")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write JSON here instead of stdout"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Pretty-print the JSON")
                .action(ArgAction::SetTrue),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    // Load cascading configuration
    let config = AtlasConfig::load(args)?;
    let tool = config.tool();

    let descriptor = SiteDescriptor::read(&tool.descriptor)?;
    let value = descriptor.to_json()?;

    let json = if tool.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    match tool.output() {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("Descriptor exported to {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
