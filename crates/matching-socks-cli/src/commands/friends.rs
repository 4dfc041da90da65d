use clap::Subcommand;
use matching_socks_core::SockApp;

#[derive(Subcommand)]
pub enum FriendsAction {
    /// List friends in order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a friend
    Add {
        /// Display name (trimmed, non-empty)
        name: String,
    },
    /// Remove a friend by id
    Remove {
        /// Friend id
        id: String,
    },
}

pub fn run(action: FriendsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = SockApp::open()?;
    match action {
        FriendsAction::List { json } => {
            let friends = app.friends();
            if json {
                println!("{}", serde_json::to_string_pretty(&friends)?);
            } else if friends.is_empty() {
                println!("no friends yet");
            } else {
                for friend in friends {
                    println!("{}  {}", friend.id, friend.name);
                }
            }
        }
        FriendsAction::Add { name } => {
            let friend = app.add_friend(&name)?;
            println!("added {} ({})", friend.name, friend.id);
        }
        FriendsAction::Remove { id } => {
            app.remove_friend(&id)?;
            println!("removed {id}");
        }
    }
    Ok(())
}
