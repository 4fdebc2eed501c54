use std::time::Duration;

use crate::error::AppError;

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `database_url` - Sqlite connection string, e.g. `sqlite://lester.sqlite?mode=rwc`
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(
    database_url: &str,
) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client shared by the Reddit and Firestore clients.
///
/// Redirects are not followed; Reddit answers unauthenticated API calls with a
/// redirect to the login page, which should surface as an error instead.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(30))
        .build()?;

    Ok(client)
}
