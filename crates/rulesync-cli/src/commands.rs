use crate::args::{Cli, Commands};
use crate::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let base_dir = match cli.base_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init => handlers::init::handle(&base_dir),

        Commands::Generate {
            tools,
            delete,
            verbose,
        } => handlers::generate::handle(&base_dir, tools.as_deref(), delete, verbose),

        Commands::Convert { from, to, verbose } => {
            handlers::convert::handle(&base_dir, from, &to, verbose)
        }

        Commands::Watch => handlers::watch::handle(&base_dir),
    }
}
