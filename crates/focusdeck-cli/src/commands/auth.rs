use clap::Subcommand;
use focusdeck_core::App;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Log in against the configured endpoint
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Must match --password; checked before any network call
        #[arg(long)]
        confirm: String,
    },
    /// Clear the current session
    Logout,
    /// Show who is signed in
    Status,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new()?;
    match action {
        AuthAction::Login { email, password } => {
            let runtime = tokio::runtime::Runtime::new()?;
            let event = runtime.block_on(app.login(&email, &password))?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        AuthAction::Signup {
            name,
            email,
            password,
            confirm,
        } => {
            let runtime = tokio::runtime::Runtime::new()?;
            let event = runtime.block_on(app.signup(&name, &email, &password, &confirm))?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        AuthAction::Logout => {
            let event = app.logout();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        AuthAction::Status => match app.session() {
            Some(session) => println!("{}", serde_json::to_string_pretty(session)?),
            None => println!("not signed in"),
        },
    }
    Ok(())
}
