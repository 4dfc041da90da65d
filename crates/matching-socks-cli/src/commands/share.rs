use matching_socks_core::SockApp;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = SockApp::open()?;
    let today = SockApp::today();

    // Make sure today has a color before counting the share.
    let color = app.today_color(today)?;
    let before = app.streak();
    let state = app.record_share(today)?;

    if before.last_share_date == Some(today) {
        println!("already shared today ({} {})", color.hex_code, color.name);
    } else {
        println!(
            "shared {} {} -- streak: {} day(s)",
            color.hex_code, color.name, state.streak_days
        );
    }
    Ok(())
}
