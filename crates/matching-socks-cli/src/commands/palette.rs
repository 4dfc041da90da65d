use clap::Subcommand;
use matching_socks_core::{palette, SockApp};

#[derive(Subcommand)]
pub enum PaletteAction {
    /// List the active palette
    List {
        /// Also show the extended picker colors
        #[arg(long)]
        extended: bool,
    },
    /// Add a custom color
    Add {
        /// Display name
        name: String,
        /// Hex code, 3 or 6 digits, '#' optional
        hex: String,
    },
    /// Remove a custom color by id
    Remove {
        /// Color id
        id: String,
    },
}

pub fn run(action: PaletteAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = SockApp::open()?;
    match action {
        PaletteAction::List { extended } => {
            for color in app.palette() {
                let marker = if color.is_default { "builtin" } else { "custom" };
                println!("{}  {} {} ({marker})", color.id, color.hex_code, color.name);
            }
            if extended {
                for color in palette::extended_palette() {
                    println!("{}  {} {} (extended)", color.id, color.hex_code, color.name);
                }
            }
        }
        PaletteAction::Add { name, hex } => {
            let color = app.add_custom_color(&name, &hex)?;
            println!("added {} {} ({})", color.hex_code, color.name, color.id);
        }
        PaletteAction::Remove { id } => {
            app.remove_color(&id)?;
            println!("removed {id}");
        }
    }
    Ok(())
}
