mod commands;
mod terminal;

use commands::{CommandLine, Commands, info, msf};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init(commands.quiet, commands.verbose);
    print::banner(cfg.quiet);

    match &commands.command {
        Commands::Msf { input, .. } => {
            print::header("reading distances", cfg.quiet);
            msf::msf(&input.file, &cfg)
        }
        Commands::Info { input } => info::info(&input.file, &cfg),
    }
}
