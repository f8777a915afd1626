use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod logging;
mod notify;
mod tui;

#[derive(Parser)]
#[command(name = "pomodoro", version, about = "Pomodoro countdown timer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the timer (terminal UI, or plain output with --headless)
    Run(commands::run::RunArgs),
    /// Print the initial timer state as JSON
    Status {
        #[command(flatten)]
        durations: commands::run::DurationArgs,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_target = match &cli.command {
        Commands::Run(args) if !args.headless => logging::LogTarget::DataDirFile,
        _ => logging::LogTarget::Stderr,
    };
    logging::init(log_target);

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Status { durations } => commands::status::run(&durations),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
