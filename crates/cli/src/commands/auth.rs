//! Mock authentication commands.
//!
//! Credentials are never verified; any email containing `@` with a password
//! of six or more characters is accepted.

use clap::Subcommand;

use maison_storefront::Storefront;
use maison_storefront::error::AppError;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Log in and remember the session
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,

        /// Display name
        #[arg(short, long)]
        name: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
}

/// Run an auth subcommand.
///
/// # Errors
///
/// Returns `AppError::BadRequest` when the mock API rejects the credentials.
pub async fn run(storefront: &Storefront, action: AuthAction) -> Result<(), AppError> {
    let mut auth = storefront.auth_store();

    match action {
        AuthAction::Login { email, password } => {
            if !auth.login(&email, &password).await {
                return Err(AppError::BadRequest("login rejected".to_string()));
            }
        }
        AuthAction::Register {
            email,
            password,
            name,
        } => {
            if !auth.register(&email, &password, &name).await {
                return Err(AppError::BadRequest("registration rejected".to_string()));
            }
        }
        AuthAction::Logout => auth.logout(),
        AuthAction::Whoami => match auth.user() {
            Some(user) => tracing::info!(admin = user.is_admin, "Logged in as {}", user.email),
            None => tracing::info!("Not logged in"),
        },
    }
    Ok(())
}
