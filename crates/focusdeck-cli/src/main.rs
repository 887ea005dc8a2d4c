use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "focusdeck-cli", version, about = "FocusDeck CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Panel navigation
    Panel {
        #[command(subcommand)]
        action: commands::panel::PanelAction,
    },
    /// Water reminder and hydration counters
    Water {
        #[command(subcommand)]
        action: commands::water::WaterAction,
    },
    /// Focus countdown
    Focus {
        #[command(subcommand)]
        action: commands::focus::FocusAction,
    },
    /// Authentication
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Day planner tasks
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Theme switching
    Theme {
        #[command(subcommand)]
        action: commands::theme::ThemeAction,
    },
    /// Static catalogs (books, AI tools, games)
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Interactive dashboard session
    Shell,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Panel { action } => commands::panel::run(action),
        Commands::Water { action } => commands::water::run(action),
        Commands::Focus { action } => commands::focus::run(action),
        Commands::Auth { action } => commands::auth::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Theme { action } => commands::theme::run(action),
        Commands::Catalog { action } => commands::catalog::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Shell => commands::shell::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
