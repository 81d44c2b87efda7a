//! PostgreSQL implementation of InvitationStore

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use invite_core::entities::InvitationCode;
use invite_core::traits::{InvitationStore, MarkOutcome, RepoResult};
use invite_core::value_objects::{RowKey, ScanRange};

use crate::models::InvitationModel;

use super::error::map_db_error;
use super::table::TableName;

/// SQL rendered once for the configured table
#[derive(Debug, Clone)]
struct Statements {
    get: String,
    scan: String,
    mark_used: String,
    exists: String,
}

impl Statements {
    fn for_table(table: &TableName) -> Self {
        Self {
            get: format!("SELECT code, used FROM {table} WHERE code = $1"),
            // TEXT cannot hold NUL, so the scan compares the UTF-8 bytes instead
            scan: format!(
                "SELECT code, used FROM {table} \
                 WHERE convert_to(code, 'UTF8') >= $1 AND convert_to(code, 'UTF8') < $2 \
                 ORDER BY convert_to(code, 'UTF8') \
                 LIMIT 2"
            ),
            mark_used: format!(
                "UPDATE {table} SET used = TRUE WHERE code = $1 AND used IS NOT TRUE"
            ),
            exists: format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE code = $1)"),
        }
    }
}

/// TEXT columns cannot hold NUL, so such a key can never match a row
fn storable(key: &str) -> bool {
    !key.contains('\0')
}

/// PostgreSQL implementation of InvitationStore
#[derive(Clone)]
pub struct PgInvitationStore {
    pool: PgPool,
    table: TableName,
    statements: Statements,
}

impl PgInvitationStore {
    /// Create a new PgInvitationStore over `table`
    pub fn new(pool: PgPool, table: &str) -> RepoResult<Self> {
        let table = TableName::parse(table)?;
        let statements = Statements::for_table(&table);
        Ok(Self {
            pool,
            table,
            statements,
        })
    }

    /// The table this store reads and writes
    pub fn table(&self) -> &TableName {
        &self.table
    }
}

#[async_trait]
impl InvitationStore for PgInvitationStore {
    #[instrument(skip(self), fields(table = %self.table))]
    async fn get(&self, code: &str) -> RepoResult<Option<InvitationCode>> {
        if !storable(code) {
            return Ok(None);
        }

        let result = sqlx::query_as::<_, InvitationModel>(&self.statements.get)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(InvitationCode::from))
    }

    #[instrument(skip(self), fields(table = %self.table))]
    async fn scan(&self, range: &ScanRange) -> RepoResult<Vec<InvitationCode>> {
        let results = sqlx::query_as::<_, InvitationModel>(&self.statements.scan)
            .bind(range.start.as_bytes())
            .bind(range.end.as_bytes())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(InvitationCode::from).collect())
    }

    #[instrument(skip(self), fields(table = %self.table))]
    async fn mark_used(&self, key: &RowKey) -> RepoResult<MarkOutcome> {
        if !storable(key.as_str()) {
            return Ok(MarkOutcome::Missing);
        }

        let result = sqlx::query(&self.statements.mark_used)
            .bind(key.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() > 0 {
            return Ok(MarkOutcome::Applied);
        }

        // Nothing written: either someone else already flipped it or the row is gone
        let exists: bool = sqlx::query_scalar(&self.statements.exists)
            .bind(key.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(if exists {
            MarkOutcome::AlreadyUsed
        } else {
            MarkOutcome::Missing
        })
    }

    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
