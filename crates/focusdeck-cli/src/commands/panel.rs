use clap::Subcommand;
use focusdeck_core::{App, Panel};

#[derive(Subcommand)]
pub enum PanelAction {
    /// Show a panel (constructs its subtree on first use) and print it
    Show {
        /// Panel slug, e.g. water-reminder
        panel: String,
    },
    /// Return to the dashboard shell
    Back,
    /// List all panel slugs
    List,
}

pub fn run(action: PanelAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new()?;
    match action {
        PanelAction::Show { panel } => {
            let panel = Panel::from_slug(&panel)
                .ok_or_else(|| format!("unknown panel: {panel} (try `panel list`)"))?;
            let event = app.show_panel(panel);
            if let Some(view) = app.panels.view(panel) {
                println!("{}", view.markup);
                if let Some(grid) = &view.grid {
                    println!("{grid}");
                }
            }
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        PanelAction::Back => {
            let event = app.go_back();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        PanelAction::List => {
            for panel in Panel::all() {
                println!("{panel}");
            }
        }
    }
    Ok(())
}
