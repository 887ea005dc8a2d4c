use clap::Subcommand;
use focusdeck_core::App;
use serde_json::json;

#[derive(Subcommand)]
pub enum WaterAction {
    /// Arm the repeating reminder
    Start {
        /// Minutes between prompts (clamped to 15-180)
        #[arg(long)]
        interval: Option<u32>,
    },
    /// Cancel the reminder
    Stop,
    /// Record one glass of water
    Drink,
    /// Zero today's counters
    ResetDay,
    /// Print hydration counters as JSON
    Status,
}

pub fn run(action: WaterAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new()?;
    match action {
        WaterAction::Start { interval } => {
            let event = app.start_water_reminder(interval);
            println!("{}", serde_json::to_string_pretty(&event)?);
            if let Some(next) = app.water.next_prompt_display() {
                println!("next reminder at {next}");
            }
        }
        WaterAction::Stop => match app.stop_water_reminder() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("no active reminder"),
        },
        WaterAction::Drink => {
            let event = app.record_drink()?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        WaterAction::ResetDay => {
            let event = app.reset_water_day()?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        WaterAction::Status => {
            let stats = app.water.stats();
            let status = json!({
                "stats": stats,
                "fill_fraction": app.water.fill_fraction(),
                "active": app.water.is_active(),
                "next_reminder": app.water.next_prompt_display(),
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }
    Ok(())
}
