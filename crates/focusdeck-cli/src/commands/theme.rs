use clap::Subcommand;
use focusdeck_core::App;

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Flip between light and dark and persist the choice
    Toggle,
    /// Print the current theme
    Status,
}

pub fn run(action: ThemeAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new()?;
    match action {
        ThemeAction::Toggle => {
            let event = app.toggle_theme()?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        ThemeAction::Status => {
            println!("{}", serde_json::to_string(&app.theme())?);
        }
    }
    Ok(())
}
