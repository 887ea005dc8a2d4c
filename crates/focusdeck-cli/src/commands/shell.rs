//! Interactive dashboard session.
//!
//! Unlike the one-shot subcommands, a shell keeps one `App` alive for its
//! whole lifetime, so panel caching, the in-memory focus countdown and the
//! water schedule behave the way a long-running dashboard does. Schedules
//! are pumped once per prompt; `tick` advances the focus countdown by hand.

use chrono::Utc;
use focusdeck_core::{App, Panel};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const HELP: &str = "\
commands:
  show <panel>        open a panel (see `panels` for slugs)
  back                return to the dashboard
  panels              list panel slugs
  theme               toggle light/dark
  drink               record a glass of water
  water start [min]   arm the reminder
  water stop          cancel the reminder
  water status        hydration counters
  focus start|pause|reset|status
  tick [n]            advance the focus countdown n seconds (default 1)
  sound <name>        rain, forest, ocean, cafe
  tasks               list planned tasks
  login <email> <password>
  logout
  help                this text
  quit";

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new()?;
    let mut rl = DefaultEditor::new()?;

    println!("FocusDeck shell. Type 'help' for commands, 'quit' to exit.");
    loop {
        // Deliver due water prompts before showing the prompt, then print
        // each pending banner exactly once.
        app.pump(Utc::now());
        for banner in app.notifications.take_all() {
            println!("[{}] {}", banner.kind, banner.message);
        }

        let line = match rl.readline("focusdeck> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        if trimmed == "quit" || trimmed == "exit" {
            break;
        }
        if let Err(err) = dispatch(&mut app, trimmed) {
            println!("error: {err}");
        }
    }
    Ok(())
}

fn dispatch(app: &mut App, line: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    match (command, args.as_slice()) {
        ("help", _) => println!("{HELP}"),
        ("panels", _) => {
            for panel in Panel::all() {
                println!("{panel}");
            }
        }
        ("show", [slug]) => {
            let panel =
                Panel::from_slug(slug).ok_or_else(|| format!("unknown panel: {slug}"))?;
            app.show_panel(panel);
            if let Some(view) = app.panels.view(panel) {
                println!("{}", view.markup);
                if let Some(grid) = &view.grid {
                    println!("{grid}");
                }
            }
        }
        ("back", _) => {
            app.go_back();
            println!("dashboard");
        }
        ("theme", _) => {
            app.toggle_theme()?;
            println!("{}", serde_json::to_string(&app.theme())?);
        }
        ("drink", _) => {
            app.record_drink()?;
            let stats = app.water.stats();
            println!(
                "{} glasses, {} mL today",
                stats.glasses_today, stats.total_ml
            );
        }
        ("water", ["start"]) => {
            app.start_water_reminder(None);
        }
        ("water", ["start", minutes]) => {
            let minutes: u32 = minutes.parse()?;
            app.start_water_reminder(Some(minutes));
        }
        ("water", ["stop"]) => {
            if app.stop_water_reminder().is_none() {
                println!("no active reminder");
            }
        }
        ("water", ["status"]) => {
            let stats = app.water.stats();
            println!(
                "{} glasses, {} mL, fill {:.0}%, reminder {}",
                stats.glasses_today,
                stats.total_ml,
                app.water.fill_fraction() * 100.0,
                match app.water.next_prompt_display() {
                    Some(next) => format!("at {next}"),
                    None => "off".to_string(),
                }
            );
        }
        ("focus", ["start"]) => {
            app.start_focus();
            println!("{}", app.focus.display());
        }
        ("focus", ["pause"]) => {
            if app.pause_focus().is_none() {
                println!("not running");
            }
        }
        ("focus", ["reset"]) => {
            app.reset_focus();
            println!("{}", app.focus.display());
        }
        ("focus", ["status"]) => {
            println!("{}", serde_json::to_string_pretty(&app.focus.snapshot())?);
        }
        ("tick", rest) => {
            let count: u32 = match rest {
                [] => 1,
                [n] => n.parse()?,
                _ => return Err("usage: tick [n]".into()),
            };
            for _ in 0..count {
                app.tick_focus();
            }
            println!("{}", app.focus.display());
        }
        ("sound", [name]) => {
            app.select_sound(name.parse()?);
        }
        ("tasks", _) => {
            for task in app.tasks() {
                let mark = if task.done { "x" } else { " " };
                println!("[{mark}] {} {}-{} {}", task.id, task.start, task.end, task.title);
            }
        }
        ("login", [email, password]) => {
            let runtime = tokio::runtime::Runtime::new()?;
            if let Err(err) = runtime.block_on(app.login(email, password)) {
                println!("error: {err}");
            }
        }
        ("logout", _) => {
            app.logout();
        }
        _ => println!("unknown command (try 'help')"),
    }
    Ok(())
}
