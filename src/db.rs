use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection,
    sqlx::sqlite::{SqliteJournalMode, SqliteSynchronous},
};

use crate::error::AppResult;

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(database_url);
    // Applied to every pooled connection as it is opened.
    opts.map_sqlx_sqlite_opts(|o| {
        o.journal_mode(SqliteJournalMode::Wal).synchronous(SqliteSynchronous::Normal)
    });
    let db = Database::connect(opts).await?;

    Migrator::up(&db, None).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, Statement, TransactionTrait};

    use super::*;

    async fn pragma<C: ConnectionTrait>(conn: &C, name: &str) -> String {
        let row = conn
            .query_one(Statement::from_string(conn.get_database_backend(), format!("PRAGMA {name}")))
            .await
            .unwrap()
            .expect("pragma row");
        row.try_get_by_index::<String>(0)
            .or_else(|_| row.try_get_by_index::<i64>(0).map(|v| v.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn pragmas_reach_every_connection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("movies.db").display());
        let db = connect_and_migrate(&url).await.unwrap();

        // An open transaction pins one connection so the next query takes another.
        let txn = db.begin().await.unwrap();
        assert_eq!(pragma(&txn, "synchronous").await, "1");
        assert_eq!(pragma(&db, "synchronous").await, "1");
        assert_eq!(pragma(&db, "journal_mode").await, "wal");
        txn.commit().await.unwrap();
    }
}
