use crate::models::{DbEntry, NewEntry};
use eyre::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use time::OffsetDateTime;
use tracing::debug;

#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    pub async fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("opening database at {:?}", path);
        if !path.exists() {
            if let Some(dir) = path.parent() {
                if !dir.as_os_str().is_empty() {
                    fs_err::create_dir_all(dir)?;
                }
            }
        }

        let options =
            SqliteConnectOptions::from_str(path.to_str().unwrap())?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        Self::setup_db(&pool).await?;

        Ok(Self { pool })
    }

    async fn setup_db(pool: &SqlitePool) -> Result<()> {
        debug!("setting up database");
        sqlx::migrate!("./migrations").run(pool).await?;

        Ok(())
    }

    fn map_query_entries(row: SqliteRow) -> DbEntry {
        DbEntry {
            id: row.get("id"),
            client_id: row.get("client_id"),
            timestamp: OffsetDateTime::from_unix_timestamp_nanos(
                row.get::<i64, _>("timestamp") as i128
            )
            .unwrap(),
            duration: row.get("duration"),
            fuel_door_position: row.get("fuel_door_position"),
            pump_side: row.get("pump_side"),
            notes: row.get("notes"),
            is_match: row.get("is_match"),
            location: row.get("location"),
            pump_id: row.get("pump_id"),
        }
    }

    pub async fn list_entries(&self) -> Result<Vec<DbEntry>> {
        let res = sqlx::query("select * from entries order by timestamp desc")
            .map(Self::map_query_entries)
            .fetch_all(&self.pool)
            .await?;

        Ok(res)
    }

    /// One transaction per batch; a duplicate client_id is dropped instead
    /// of updated, entries never change once stored.
    pub async fn add_entries(&self, entries: &[NewEntry]) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for el in entries {
            let created_at = OffsetDateTime::now_utc().to_string();
            sqlx::query(
                r#"
                insert into entries(
                    client_id, timestamp, duration, fuel_door_position, pump_side,
                    notes, is_match, location, pump_id, created_at
                )
                values(
                    ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10
                )
                on conflict(client_id) do nothing
            "#,
            )
            .bind(el.client_id.as_str())
            .bind(el.timestamp.unix_timestamp_nanos() as i64)
            .bind(el.duration)
            .bind(el.fuel_door_position.as_str())
            .bind(el.pump_side.as_str())
            .bind(el.notes.as_str())
            .bind(el.is_match)
            .bind(el.location.as_deref())
            .bind(el.pump_id.as_deref())
            .bind(created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
