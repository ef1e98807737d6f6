use clap::Parser;
use taskdeck::cli::commands::Cli;
use taskdeck::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch the dashboard TUI
            let dir = cli.dir.clone();
            if let Err(e) = taskdeck::tui::run(dir.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
