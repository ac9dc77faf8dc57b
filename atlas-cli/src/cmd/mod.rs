pub mod check;
pub mod export;
pub mod outline;

use clap::{Arg, Command};

/// Args shared by every subcommand.
pub fn add_descriptor_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("descriptor")
                .short('d')
                .long("descriptor")
                .value_name("FILE")
                .help("Site descriptor file"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Tool configuration file"),
        )
}
