use anyhow::{Context, bail};
use ledger_auth::credentials::Credentials;
use ledger_auth::password;
use ledger_core::entities::User;
use ledger_db::service::LedgerService;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{UserAddArgs, UserCommands};
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(action: &UserCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        UserCommands::Add(args) => {
            let user = add_user(&ctx.service, args, ctx.config.auth.bcrypt_cost).await?;
            output(&user, flags.format)
        }
    }
}

/// Insert a user whose credentials would pass the login check.
pub async fn add_user(
    service: &LedgerService,
    args: &UserAddArgs,
    bcrypt_cost: u32,
) -> anyhow::Result<User> {
    let Some(credentials) = Credentials::parse(&args.email, &args.password) else {
        bail!("email must be an address and password at least six characters");
    };
    if service.find_user_by_email(credentials.email()).await?.is_some() {
        bail!("a user with email {} already exists", credentials.email());
    }

    let cost = bcrypt_cost;
    let plain = credentials.password().to_string();
    let hashed = tokio::task::spawn_blocking(move || password::hash(&plain, cost))
        .await
        .context("password hashing task failed")??;

    let user = service
        .create_user(&args.name, credentials.email(), &hashed)
        .await
        .context("failed to create user")?;
    tracing::info!(user_id = %user.id, "user added");
    Ok(user)
}
