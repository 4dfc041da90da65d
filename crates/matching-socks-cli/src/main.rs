use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "matching-socks-cli", version, about = "Matching Socks CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's color
    Color {
        #[command(subcommand)]
        action: commands::color::ColorAction,
    },
    /// Record a share of today's color
    Share,
    /// Streak status and maintenance
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Friend list management
    Friends {
        #[command(subcommand)]
        action: commands::friends::FriendsAction,
    },
    /// Color palette management
    Palette {
        #[command(subcommand)]
        action: commands::palette::PaletteAction,
    },
    /// Group picture management
    Group {
        #[command(subcommand)]
        action: commands::group::GroupAction,
    },
    /// App state and onboarding
    App {
        #[command(subcommand)]
        action: commands::app::AppAction,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Color { action } => commands::color::run(action),
        Commands::Share => commands::share::run(),
        Commands::Streak { action } => commands::streak::run(action),
        Commands::Friends { action } => commands::friends::run(action),
        Commands::Palette { action } => commands::palette::run(action),
        Commands::Group { action } => commands::group::run(action),
        Commands::App { action } => commands::app::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
