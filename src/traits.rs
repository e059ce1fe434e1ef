use anyhow::Result;
use sqlx::sqlite::SqliteQueryResult;

use crate::types::uuid::Uuid;

pub trait DbTable {
    const NAME_SINGULAR: &'static str;
    const NAME_PLURAL: &'static str;
    const TABLE_NAME: &'static str = Self::NAME_PLURAL;
}

pub trait Id {
    fn id(&self) -> Uuid;
}

pub trait CreateTable {
    async fn create_table(conn: &sqlx::SqlitePool) -> Result<()>;
}

pub trait Insertable {
    async fn insert(&self, conn: &sqlx::SqlitePool) -> Result<SqliteQueryResult>;
}

pub trait Updateable {
    async fn update(&self, conn: &sqlx::SqlitePool, new: Self) -> Result<SqliteQueryResult>
    where
        Self: Sized;
}

/// Soft removal. Entities are flagged as deleted, never dropped from the table.
pub trait Removeable {
    async fn remove(&self, conn: &sqlx::SqlitePool) -> Result<SqliteQueryResult>;
}

pub trait Queryable {
    async fn get_by_id(conn: &sqlx::SqlitePool, id: &Uuid) -> Result<Option<Self>>
    where
        Self: Sized;
    async fn get_all(conn: &sqlx::SqlitePool) -> Result<Vec<Self>>
    where
        Self: Sized;
}
