use anyhow::Result;
use clap::{Arg, Command};
use dotenvy::{dotenv, var as envar};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
    Pool, SqlitePool,
};

mod routes;

use libris::config::Config;
use libris::traits::CreateTable;
use libris::types::author::Author;

fn arg_parser() -> Command {
    Command::new("libris")
        .about("Book catalog server")
        .arg(
            Arg::new("database-url")
                .long("database-url")
                .help("Path to the sqlite database file"),
        )
}

async fn connect_to_db(db_url: Option<String>, config: &Config) -> Result<SqlitePool> {
    let db_url = match db_url {
        Some(db_url) => db_url,
        None => match dotenv() {
            Ok(_) => match envar("DATABASE_URL").ok() {
                Some(db_url) => db_url,
                None => config.database_url.clone(),
            },
            Err(_) => config.database_url.clone(),
        },
    };

    Ok(Pool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_url)
            .journal_mode(SqliteJournalMode::Wal)
            .create_if_missing(true),
    )
    .await?)
}

async fn create_tables(conn: &SqlitePool) -> Result<()> {
    Author::create_table(conn).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let matches = arg_parser().get_matches();
    let config = Config::read_config()?;

    let conn = connect_to_db(matches.get_one::<String>("database-url").cloned(), &config).await?;
    create_tables(&conn).await?;

    routes::start(&conn, config.listen_addr).await
}
