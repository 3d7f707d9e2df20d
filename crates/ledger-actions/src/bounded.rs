use std::future::Future;
use std::time::Duration;

use ledger_db::error::DatabaseError;

use crate::error::StoreError;

/// Run one storage call under `limit`. No retries.
pub(crate) async fn bounded<T, F>(
    operation: &'static str,
    limit: Duration,
    call: F,
) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, DatabaseError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(source)) => Err(StoreError::Database { operation, source }),
        Err(_) => Err(StoreError::Timeout { operation, limit }),
    }
}
