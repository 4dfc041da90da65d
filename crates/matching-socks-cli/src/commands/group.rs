use clap::Subcommand;
use matching_socks_core::SockApp;

#[derive(Subcommand)]
pub enum GroupAction {
    /// Set the group picture URI
    SetPicture {
        /// Picture URI (e.g. file:///...)
        uri: String,
    },
    /// Show the group picture URI
    ShowPicture,
    /// Remove the group picture
    ClearPicture,
}

pub fn run(action: GroupAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = SockApp::open()?;
    match action {
        GroupAction::SetPicture { uri } => {
            app.set_group_picture(&uri)?;
            println!("group picture set");
        }
        GroupAction::ShowPicture => match app.group_picture() {
            Some(uri) => println!("{uri}"),
            None => println!("no group picture set"),
        },
        GroupAction::ClearPicture => {
            app.clear_group_picture()?;
            println!("group picture cleared");
        }
    }
    Ok(())
}
