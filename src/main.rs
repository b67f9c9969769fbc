use anyhow::Result;
use taskman::commands::Cli;
use taskman::libs::logging;

fn main() -> Result<()> {
    logging::init();
    Cli::run()
}
