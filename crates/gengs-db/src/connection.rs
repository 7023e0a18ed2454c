//! Store connector: opens the single database handle at process start.
//!
//! There is no retry, pooling configuration, or health checking here; the
//! driver's own lazy connection management applies after startup.

use crate::Result as DbErrorResult;

use log::{info, warn};
use mongodb::bson::doc;
use mongodb::{Client, Database};

/// Open a handle to the document store.
///
/// Returns `Err` only when the URI itself cannot be parsed. An unreachable
/// store is logged as a warning and the lazy handle is returned anyway, so
/// operations start succeeding once the store comes up; until then each store
/// call fails and is surfaced to the caller of that operation.
pub async fn connect(uri: &str, database: &str) -> DbErrorResult<Database> {
    let client = Client::with_uri_str(uri).await?;
    let db = client.database(database);

    match db.run_command(doc! { "ping": 1 }).await {
        Ok(_) => info!("Store connection established: {}", database),
        Err(e) => warn!("Store unreachable at startup ({}): {}", database, e),
    }

    Ok(db)
}
