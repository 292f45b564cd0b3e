use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

use super::schema;

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());

    // Every pooled connection to `:memory:` would open its own empty database.
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;

    enable_foreign_keys(&db).await?;
    run_migrations(&db).await?;

    Ok(db)
}

async fn enable_foreign_keys(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON".to_owned(),
    ))
    .await?;
    Ok(())
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    for ddl in schema::SQLITE_DDL {
        db.execute(Statement::from_string(db.get_database_backend(), ddl.to_owned()))
            .await?;
    }

    tracing::debug!("Schema ready (Author, Books)");
    Ok(())
}
