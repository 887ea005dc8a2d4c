use chrono::NaiveTime;
use clap::Subcommand;
use focusdeck_core::{App, Priority};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to the day plan
    Add {
        title: String,
        /// low, medium or high
        #[arg(long, default_value = "medium", value_parser = parse_priority)]
        priority: Priority,
        /// Start time, e.g. 09:00
        #[arg(long, value_parser = parse_time)]
        start: NaiveTime,
        /// End time, must be after --start
        #[arg(long, value_parser = parse_time)]
        end: NaiveTime,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List tasks
    List {
        #[arg(long)]
        json: bool,
    },
    /// Mark a task complete
    Done { id: String },
    /// Remove a task
    Remove { id: String },
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    match s {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        other => Err(format!("unknown priority: {other}")),
    }
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM: {e}"))
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new()?;
    match action {
        TaskAction::Add {
            title,
            priority,
            start,
            end,
            description,
        } => {
            let event = app.add_task(&title, priority, start, end, &description)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TaskAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(app.tasks())?);
            } else {
                for task in app.tasks() {
                    let mark = if task.done { "x" } else { " " };
                    println!(
                        "[{mark}] {} {}-{} {} ({:?})",
                        task.id, task.start, task.end, task.title, task.priority
                    );
                }
            }
        }
        TaskAction::Done { id } => {
            let event = app.complete_task(&id)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TaskAction::Remove { id } => {
            let event = app.remove_task(&id)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }
    Ok(())
}
