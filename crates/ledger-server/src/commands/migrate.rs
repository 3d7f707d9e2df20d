use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MigrateResponse<'a> {
    database: &'a str,
    invoices: i64,
}

/// Migrations already ran when the context opened the database; report the
/// result.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let invoices = ctx.service.count_invoices().await?;
    output(
        &MigrateResponse {
            database: &ctx.config.database.path,
            invoices,
        },
        flags.format,
    )
}
