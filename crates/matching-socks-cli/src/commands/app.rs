use clap::Subcommand;
use matching_socks_core::SockApp;

#[derive(Subcommand)]
pub enum AppAction {
    /// Show app status (first run, counts, store location)
    Status,
    /// Mark onboarding as complete
    CompleteOnboarding,
    /// Full reset: remove all stored data
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: AppAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = SockApp::open()?;
    match action {
        AppAction::Status => {
            println!("store:       {}", app.store().path().display());
            println!("first run:   {}", app.is_first_time());
            println!("friends:     {}", app.friends().len());
            println!("palette:     {} colors", app.palette().len());
            println!("daily log:   {} entries", app.color_history().len());
            println!("streak:      {} day(s)", app.streak().streak_days);
        }
        AppAction::CompleteOnboarding => {
            app.complete_onboarding()?;
            println!("onboarding complete");
        }
        AppAction::Reset { yes } => {
            if !yes {
                eprintln!("this removes all friends, colors, history, and streak data");
                eprintln!("re-run with --yes to confirm");
                std::process::exit(1);
            }
            app.reset_all()?;
            println!("all data removed");
        }
    }
    Ok(())
}
