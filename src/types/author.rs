use std::fmt::Display;

use anyhow::Result;
use derives::{DbTable, Id};
use sqlx::{sqlite::SqliteQueryResult, FromRow};

use crate::{
    traits::{CreateTable, DbTable, Id, Insertable, Queryable, Removeable, Updateable},
    types::{date::OptionalDate, uuid::Uuid},
};

#[derive(Default, Debug, Clone, PartialEq, Eq, FromRow, DbTable, Id)]
pub struct Author {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub family_name: Option<String>,
    pub date_of_birth: OptionalDate,
    pub date_of_death: OptionalDate,
    pub deleted: bool,
}

/// Derived display values. Computed on demand from the raw fields,
/// never persisted.
impl Author {
    /// Display name, `"family_name, first_name"`. Empty when either part
    /// is missing or blank, so a lone comma is never produced.
    pub fn name(&self) -> String {
        match (&self.first_name, &self.family_name) {
            (Some(first_name), Some(family_name))
                if !first_name.is_empty() && !family_name.is_empty() =>
            {
                format!("{}, {}", family_name, first_name)
            }
            _ => String::new(),
        }
    }

    /// Canonical catalog path for this author.
    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id.0)
    }

    pub fn date_of_birth_formatted(&self) -> Option<String> {
        self.date_of_birth.formatted()
    }

    pub fn date_of_death_formatted(&self) -> Option<String> {
        self.date_of_death.formatted()
    }

    /// `"born - died"`, just `"born"` while no death date is known, and
    /// empty without a birth date (a death date alone shows nothing).
    pub fn lifespan(&self) -> String {
        match (self.date_of_birth_formatted(), self.date_of_death_formatted()) {
            (Some(born), Some(died)) => format!("{} - {}", born, died),
            (Some(born), None) => born,
            (None, _) => String::new(),
        }
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.name();
        if name.is_empty() {
            write!(f, "{}", self.id.0)
        } else {
            write!(f, "{} ({})", name, self.id.0)
        }
    }
}

impl CreateTable for Author {
    async fn create_table(conn: &sqlx::SqlitePool) -> Result<()> {
        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id TEXT PRIMARY KEY NOT NULL,
                first_name TEXT CHECK (length(first_name) <= 100),
                family_name TEXT CHECK (length(family_name) <= 100),
                date_of_birth INTEGER,
                date_of_death INTEGER,
                deleted BOOL DEFAULT FALSE
            );"#,
            Self::TABLE_NAME
        ))
        .execute(conn)
        .await?;
        Ok(())
    }
}

impl Insertable for Author {
    async fn insert(&self, conn: &sqlx::SqlitePool) -> Result<SqliteQueryResult> {
        Ok(sqlx::query(&format!(
            r#"
            INSERT INTO {} ( id, first_name, family_name, date_of_birth, date_of_death, deleted )
            VALUES ( ?1, ?2, ?3, ?4, ?5, ?6 )
            "#,
            Self::TABLE_NAME
        ))
        .bind(self.id())
        .bind(&self.first_name)
        .bind(&self.family_name)
        .bind(self.date_of_birth)
        .bind(self.date_of_death)
        .bind(self.deleted)
        .execute(conn)
        .await?)
    }
}

impl Updateable for Author {
    async fn update(&self, conn: &sqlx::SqlitePool, new: Self) -> Result<SqliteQueryResult> {
        Ok(sqlx::query(&format!(
            r#"
            UPDATE {}
            SET
                first_name = ?2,
                family_name = ?3,
                date_of_birth = ?4,
                date_of_death = ?5,
                deleted = ?6
            WHERE
                id = ?1;
            "#,
            Self::TABLE_NAME
        ))
        .bind(self.id())
        .bind(&new.first_name)
        .bind(&new.family_name)
        .bind(new.date_of_birth)
        .bind(new.date_of_death)
        .bind(new.deleted)
        .execute(conn)
        .await?)
    }
}

impl Removeable for Author {
    async fn remove(&self, conn: &sqlx::SqlitePool) -> Result<SqliteQueryResult> {
        Ok(sqlx::query(&format!(
            "UPDATE {} SET deleted = TRUE WHERE id = ?1;",
            Self::TABLE_NAME
        ))
        .bind(self.id())
        .execute(conn)
        .await?)
    }
}

impl Queryable for Author {
    async fn get_by_id(conn: &sqlx::SqlitePool, id: &Uuid) -> Result<Option<Self>> {
        Ok(sqlx::query_as::<_, Self>(&format!(
            "SELECT * FROM {} WHERE id = ?1 AND deleted = FALSE;",
            Self::TABLE_NAME
        ))
        .bind(id)
        .fetch_optional(conn)
        .await?)
    }

    async fn get_all(conn: &sqlx::SqlitePool) -> Result<Vec<Self>> {
        Ok(sqlx::query_as::<_, Self>(&format!(
            "SELECT * FROM {} WHERE deleted = FALSE;",
            Self::TABLE_NAME
        ))
        .fetch_all(conn)
        .await?)
    }
}
