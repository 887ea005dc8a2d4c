use clap::Subcommand;
use focusdeck_core::{AmbientSound, App, FocusState};

#[derive(Subcommand)]
pub enum FocusAction {
    /// Print the timer snapshot as JSON
    Status,
    /// Start (or resume) the countdown
    Start,
    /// Pause a running countdown
    Pause,
    /// Reset to a full 25:00 session
    Reset,
    /// Run the countdown in this process
    Run {
        /// Simulate this many seconds instead of sleeping in real time
        #[arg(long)]
        ticks: Option<u32>,
    },
    /// Select the ambient sound (rain, forest, ocean, cafe)
    Sound { name: AmbientSoundArg },
}

/// Thin parse wrapper so clap reports bad names itself.
#[derive(Clone)]
pub struct AmbientSoundArg(pub AmbientSound);

impl std::str::FromStr for AmbientSoundArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(AmbientSoundArg)
    }
}

pub fn run(action: FocusAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new()?;
    match action {
        FocusAction::Status => {
            println!("{}", serde_json::to_string_pretty(&app.focus.snapshot())?);
        }
        FocusAction::Start => match app.start_focus() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("already running"),
        },
        FocusAction::Pause => match app.pause_focus() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("not running"),
        },
        FocusAction::Reset => {
            let event = app.reset_focus();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        FocusAction::Run { ticks } => {
            app.start_focus();
            run_countdown(&mut app, ticks)?;
        }
        FocusAction::Sound { name } => {
            let event = app.select_sound(name.0);
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }
    Ok(())
}

/// Drive the countdown to completion. With `--ticks` the clock is
/// simulated; without it, each tick follows a one-second sleep.
fn run_countdown(app: &mut App, ticks: Option<u32>) -> Result<(), Box<dyn std::error::Error>> {
    let simulate = ticks.is_some();
    let mut remaining = ticks.unwrap_or(u32::MAX);
    while remaining > 0 && app.focus.state() == FocusState::Running {
        if !simulate {
            std::thread::sleep(std::time::Duration::from_secs(1));
        }
        if let Some(event) = app.tick_focus() {
            println!("{}", serde_json::to_string_pretty(&event)?);
            return Ok(());
        }
        if !simulate {
            println!("{}", app.focus.display());
        }
        remaining -= 1;
    }
    println!("{}", serde_json::to_string_pretty(&app.focus.snapshot())?);
    Ok(())
}
