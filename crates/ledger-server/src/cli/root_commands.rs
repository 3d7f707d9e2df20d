use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the dashboard HTTP server.
    Serve(ServeArgs),
    /// Create or upgrade the database schema, then exit.
    Migrate,
    /// Manage dashboard users.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Load demo customers, invoices, revenue, and a login.
    Seed(SeedArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides `server.bind`).
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Add a user who can sign in.
    Add(UserAddArgs),
}

#[derive(Clone, Debug, Args)]
pub struct UserAddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// At least six characters.
    #[arg(long)]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct SeedArgs {
    /// Skip the demo login user.
    #[arg(long)]
    pub no_user: bool,
}
