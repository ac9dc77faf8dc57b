use anyhow::{Result, bail};
use atlas_core::content::ContentScanner;
use atlas_core::{SiteDescriptor, validate, validate_with_routes};
use clap::{Arg, ArgMatches, Command};

use crate::cmd::add_descriptor_args;
use crate::config::AtlasConfig;

pub fn make_subcommand() -> Command {
    add_descriptor_args(Command::new("check"))
        .about("Validate a site descriptor's structure")
        .arg(
            Arg::new("content-dir")
                .long("content-dir")
                .value_name("DIR")
                .help("Content directory to cross-check page references against"),
        )
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    // Load cascading configuration
    let config = AtlasConfig::load(args)?;
    let tool = config.tool();

    let descriptor = SiteDescriptor::read(&tool.descriptor)?;

    let lints = match tool.content_dir() {
        Some(dir) => {
            let routes = ContentScanner::new(dir).routes()?;
            println!("Cross-checking page references against {}", dir);
            validate_with_routes(&descriptor, &routes)
        }
        None => validate(&descriptor),
    };

    if lints.is_empty() {
        println!("{} is structurally valid", tool.descriptor);
        return Ok(());
    }

    for lint in &lints {
        eprintln!("warning: {}", lint);
    }
    bail!("{} problem(s) found in {}", lints.len(), tool.descriptor)
}
