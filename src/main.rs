use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = taskboard::cli::Cli::parse();
    let config = taskboard::config::from_cli(&cli)?;
    taskboard::logging::init_tracing(&config, cli.log_filter.clone())?;

    match cli.command.clone() {
        Some(taskboard::cli::CliCommand::Board) | None => taskboard::tui::run(config)?,
        Some(command) => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            taskboard::commands::execute(&config, command, &mut handle)?;
        }
    }

    Ok(())
}
