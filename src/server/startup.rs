use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Installs the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, falling back to `info,sqlx=warn`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the `users` and `tasks` tables exist.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Opens the store connection without failing startup.
///
/// A failed connection is logged and the server keeps running without a
/// store. There is no retry.
///
/// # Returns
/// - `Some(DatabaseConnection)` - Store connected and migrated
/// - `None` - Connection or migration failed
pub async fn connect_or_degrade(config: &Config) -> Option<DatabaseConnection> {
    match connect_to_database(config).await {
        Ok(db) => {
            tracing::info!("Connected to database");
            Some(db)
        }
        Err(e) => {
            tracing::error!("Failed to connect to database, serving without a store: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbErr, SqlErr};
    use test_utils::factory;
    use uuid::Uuid;

    use crate::server::{data::user::UserRepository, model::user::CreateUserParam};

    fn config(database_url: &str) -> Config {
        Config {
            database_url: database_url.to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
        }
    }

    /// Tests that migrations give `users.username` a unique index.
    ///
    /// Expected: the second username, differing only in case, is a unique violation
    #[tokio::test]
    async fn migrated_store_rejects_case_variant_username() {
        let db = connect_to_database(&config("sqlite::memory:"))
            .await
            .unwrap();

        let repo = UserRepository::new(&db);
        repo.create(CreateUserParam {
            username: "Ann".to_string(),
        })
        .await
        .unwrap();

        let result = repo
            .create(CreateUserParam {
                username: "ANN".to_string(),
            })
            .await;

        let err: DbErr = result.unwrap_err();
        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        ));
    }

    /// Tests that migrations leave `tasks.user_id` without a foreign key.
    ///
    /// Expected: a task naming an unknown user is stored
    #[tokio::test]
    async fn migrated_store_accepts_task_for_unknown_user() {
        let db = connect_to_database(&config("sqlite::memory:"))
            .await
            .unwrap();

        let owner = Uuid::new_v4();
        let task = factory::create_task(&db, owner).await.unwrap();

        assert_eq!(task.user_id, owner);
    }

    /// Tests that an unreachable store does not abort startup.
    ///
    /// Expected: None
    #[tokio::test]
    async fn unreachable_store_degrades_to_none() {
        let url = "sqlite:///nonexistent-taskboard-dir/taskboard.db?mode=ro";

        let db = connect_or_degrade(&config(url)).await;

        assert!(db.is_none());
    }
}
