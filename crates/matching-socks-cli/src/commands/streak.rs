use clap::Subcommand;
use matching_socks_core::SockApp;

#[derive(Subcommand)]
pub enum StreakAction {
    /// Show the stored streak state
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the passive day-rollover check (freeze/reset without sharing)
    Check,
    /// Reset the streak to zero
    Reset,
}

fn print_state(state: &matching_socks_core::StreakState) {
    println!("streak days:   {}", state.streak_days);
    match state.last_share_date {
        Some(date) => println!("last share:    {date}"),
        None => println!("last share:    never"),
    }
    println!("missed days:   {}", state.consecutive_missed_days);
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = SockApp::open()?;
    match action {
        StreakAction::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&app.streak())?);
            } else {
                print_state(&app.streak());
            }
        }
        StreakAction::Check => {
            let state = app.check_streak(SockApp::today())?;
            print_state(&state);
        }
        StreakAction::Reset => {
            app.reset_streak()?;
            println!("streak reset to 0");
        }
    }
    Ok(())
}
