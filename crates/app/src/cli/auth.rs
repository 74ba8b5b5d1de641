use clap::Args;

use brewpos::navigation::View;
use brewpos_app::{auth::AuthError, context::AppContext};

use super::open;

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account name
    #[arg(long, short)]
    username: String,

    /// Account password
    #[arg(long, short, env = "BREWPOS_PASSWORD", hide_env_values = true)]
    password: String,
}

pub(crate) async fn login(context: &AppContext, args: LoginArgs) -> Result<(), String> {
    let outcome = context
        .auth
        .login(&args.username, &args.password)
        .await
        .map_err(|error| match error {
            AuthError::InvalidCredentials => error.to_string(),
            AuthError::Api(source) => format!("login failed: {source}"),
        })?;

    println!("logged in as {} ({:?})", args.username, outcome.role);
    println!("landing: {}", outcome.landing);

    Ok(())
}

pub(crate) async fn logout(context: &AppContext) -> Result<(), String> {
    context.auth.logout().await;

    println!("logged out");

    Ok(())
}

pub(crate) async fn whoami(context: &AppContext) -> Result<(), String> {
    let session = open(context, View::Home).await?;

    let user = session
        .user()
        .ok_or_else(|| "session has no user profile".to_string())?;

    println!("id: {}", user.id);
    println!("username: {}", user.username);
    println!("email: {}", user.email);
    println!("role: {:?}", user.role);
    println!("active: {}", user.is_active);

    Ok(())
}
