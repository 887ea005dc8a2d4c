use clap::Subcommand;
use focusdeck_core::{catalog, App};

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List the study library
    Books,
    /// List the AI tools
    Tools,
    /// List the games
    Games,
    /// Open a catalog link with the platform handler
    Open { url: String },
    /// Start a book download (surfaces a notification)
    Download { title: String },
    /// Activate a game (surfaces a notification, nothing launches)
    Play { name: String },
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CatalogAction::Books => {
            for book in catalog::books() {
                println!(
                    "{} {} by {} [{} / {}]\n    {}\n    {}",
                    book.icon, book.title, book.author, book.category, book.level,
                    book.description, book.url
                );
            }
        }
        CatalogAction::Tools => {
            for tool in catalog::ai_tools() {
                println!(
                    "{} {} - {}\n    Use for: {} [{}]\n    {}",
                    tool.icon,
                    tool.name,
                    tool.description,
                    tool.use_for,
                    tool.features.join(", "),
                    tool.url
                );
            }
        }
        CatalogAction::Games => {
            for game in catalog::games() {
                println!(
                    "{} {} ({})\n    {} [{}]",
                    game.icon,
                    game.name,
                    game.category,
                    game.description,
                    game.features.join(", ")
                );
            }
        }
        CatalogAction::Open { url } => {
            let mut app = App::new()?;
            app.open_link(&url)?;
            println!("opened {url}");
        }
        CatalogAction::Download { title } => {
            let mut app = App::new()?;
            app.download_book(&title);
            for banner in app.notifications.active() {
                println!("{}", banner.message);
            }
        }
        CatalogAction::Play { name } => {
            let mut app = App::new()?;
            app.play_game(&name);
            for banner in app.notifications.active() {
                println!("{}", banner.message);
            }
        }
    }
    Ok(())
}
