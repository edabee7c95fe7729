//! Database layer for persisting analysis history using `SQLite` via `SQLx`.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};

use crate::domain::analysis::AnalysisResult;

/// Subdirectory under the gradetty home where the database file is stored.
pub const DB_DIR: &str = "db";

/// Default database filename.
pub const DB_FILE: &str = "gradetty.db";

/// Maximum number of pooled `SQLite` connections for the on-disk database.
///
/// A value greater than `1` allows list reads to continue while a finished
/// analysis is being written in the background.
pub const DB_POOL_MAX_CONNECTIONS: u32 = 10;

/// Thin wrapper around a `SQLite` connection pool providing query methods.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

/// Row returned when loading an analysis from the `analysis` table.
pub struct AnalysisRow {
    pub created_at: i64,
    pub id: String,
    pub language: Option<String>,
    pub owner: String,
    pub repo_name: String,
    pub repo_url: String,
    pub result_json: String,
    pub score: f64,
    pub summary: String,
}

impl Database {
    /// Opens the `SQLite` database and runs embedded migrations.
    ///
    /// Uses up to `DB_POOL_MAX_CONNECTIONS` pooled connections so UI reads do
    /// not serialize behind background writes.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the database cannot
    /// be opened, or migrations fail.
    pub async fn open(db_path: &Path) -> Result<Self, String> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("Failed to create database directory: {err}"))?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(DB_POOL_MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(|err| format!("Failed to connect to database: {err}"))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|err| format!("Failed to run migrations: {err}"))?;

        Ok(Self { pool })
    }

    /// Inserts a finished analysis along with its full serialized result.
    ///
    /// # Errors
    /// Returns an error if the result cannot be serialized or the row cannot
    /// be inserted.
    pub async fn insert_analysis(
        &self,
        id: &str,
        repo_url: &str,
        result: &AnalysisResult,
    ) -> Result<(), String> {
        let result_json = serde_json::to_string(result)
            .map_err(|err| format!("Failed to serialize analysis result: {err}"))?;

        sqlx::query(
            r"
INSERT INTO analysis (id, repo_url, repo_name, owner, score, language, summary, result_json)
VALUES (?, ?, ?, ?, ?, ?, ?, ?)
",
        )
        .bind(id)
        .bind(repo_url)
        .bind(&result.details.name)
        .bind(&result.details.owner)
        .bind(result.score)
        .bind(result.details.language.as_deref())
        .bind(&result.summary)
        .bind(result_json)
        .execute(&self.pool)
        .await
        .map_err(|err| format!("Failed to insert analysis: {err}"))?;

        Ok(())
    }

    /// Loads all stored analyses ordered by most recent first.
    ///
    /// # Errors
    /// Returns an error if analysis rows cannot be read from the database.
    pub async fn load_analyses(&self) -> Result<Vec<AnalysisRow>, String> {
        let rows = sqlx::query(
            r"
SELECT id, repo_url, repo_name, owner, score, language, summary, result_json, created_at
FROM analysis
ORDER BY created_at DESC, id
",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| format!("Failed to load analyses: {err}"))?;

        Ok(rows
            .iter()
            .map(|row| AnalysisRow {
                created_at: row.get("created_at"),
                id: row.get("id"),
                language: row.get("language"),
                owner: row.get("owner"),
                repo_name: row.get("repo_name"),
                repo_url: row.get("repo_url"),
                result_json: row.get("result_json"),
                score: row.get("score"),
                summary: row.get("summary"),
            })
            .collect())
    }

    /// Looks up one analysis by identifier.
    ///
    /// # Errors
    /// Returns an error if the analysis lookup query fails.
    pub async fn get_analysis(&self, id: &str) -> Result<Option<AnalysisRow>, String> {
        let row = sqlx::query(
            r"
SELECT id, repo_url, repo_name, owner, score, language, summary, result_json, created_at
FROM analysis
WHERE id = ?
",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| format!("Failed to get analysis: {err}"))?;

        Ok(row.map(|row| AnalysisRow {
            created_at: row.get("created_at"),
            id: row.get("id"),
            language: row.get("language"),
            owner: row.get("owner"),
            repo_name: row.get("repo_name"),
            repo_url: row.get("repo_url"),
            result_json: row.get("result_json"),
            score: row.get("score"),
            summary: row.get("summary"),
        }))
    }

    /// Deletes an analysis row by identifier.
    ///
    /// # Errors
    /// Returns an error if the analysis row cannot be deleted.
    pub async fn delete_analysis(&self, id: &str) -> Result<(), String> {
        sqlx::query(
            r"
DELETE FROM analysis
WHERE id = ?
",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|err| format!("Failed to delete analysis: {err}"))?;

        Ok(())
    }

    /// Overrides the `created_at` timestamp for one analysis row.
    ///
    /// This is primarily used by deterministic ordering tests.
    ///
    /// # Errors
    /// Returns an error if the timestamp update fails.
    pub async fn update_analysis_created_at(&self, id: &str, created_at: i64) -> Result<(), String> {
        sqlx::query(
            r"
UPDATE analysis
SET created_at = ?
WHERE id = ?
",
        )
        .bind(created_at)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|err| format!("Failed to update analysis created_at: {err}"))?;

        Ok(())
    }
}

#[cfg(test)]
impl Database {
    /// Opens an in-memory `SQLite` database for tests and runs migrations.
    ///
    /// # Errors
    /// Returns an error if the database connection or migrations fail.
    pub async fn open_in_memory() -> Result<Self, String> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|err| format!("Failed to connect to in-memory database: {err}"))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|err| format!("Failed to run migrations: {err}"))?;

        Ok(Self { pool })
    }
}
