use clap::Subcommand;
use matching_socks_core::SockApp;

#[derive(Subcommand)]
pub enum ColorAction {
    /// Show today's color, drawing one if none exists yet
    Today,
    /// Replace today's color with a fresh random pick
    Reroll,
    /// Show the daily color history
    History,
}

pub fn run(action: ColorAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = SockApp::open()?;
    match action {
        ColorAction::Today => {
            let color = app.today_color_now()?;
            println!("{} {}", color.hex_code, color.name);
        }
        ColorAction::Reroll => {
            let color = app.reroll_today(SockApp::today())?;
            println!("today's color is now {} {}", color.hex_code, color.name);
        }
        ColorAction::History => {
            for entry in app.color_history() {
                println!("{}  {} {}", entry.date, entry.color.hex_code, entry.color.name);
            }
        }
    }
    Ok(())
}
