//! Tools repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::tool::{reconcile_available, CreateTool, Tool, UpdateTool},
};

/// Postgres error code for foreign key violations
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Clone)]
pub struct ToolsRepository {
    pool: Pool<Postgres>,
}

impl ToolsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all tools
    pub async fn list(&self) -> AppResult<Vec<Tool>> {
        let tools = sqlx::query_as::<_, Tool>("SELECT * FROM tools ORDER BY nama_alat")
            .fetch_all(&self.pool)
            .await?;
        Ok(tools)
    }

    /// Get tool by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Tool> {
        sqlx::query_as::<_, Tool>("SELECT * FROM tools WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tool with id {} not found", id)))
    }

    /// Create a new tool. A brand-new tool starts fully available:
    /// `jumlah_sekarang = jumlah_awal`, `jumlah_terpakai = 0`.
    pub async fn create(&self, data: &CreateTool) -> AppResult<Tool> {
        let tool = sqlx::query_as::<_, Tool>(
            r#"
            INSERT INTO tools (nama_alat, kode_alat, merk, tahun_pembuatan, satuan,
                               kapasitas, kondisi, jumlah_awal, jumlah_sekarang, jumlah_terpakai)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8, 0)
            RETURNING *
            "#,
        )
        .bind(&data.nama_alat)
        .bind(&data.kode_alat)
        .bind(&data.merk)
        .bind(&data.tahun_pembuatan)
        .bind(&data.satuan)
        .bind(&data.kapasitas)
        .bind(data.kondisi)
        .bind(data.jumlah_awal)
        .fetch_one(&self.pool)
        .await?;
        Ok(tool)
    }

    /// Update a tool, reconciling the available counter with the stock delta.
    ///
    /// The stored row is locked and re-read in the same transaction so the
    /// delta is computed against the actual stored `jumlah_awal`, not the
    /// possibly stale value a client loaded. `jumlah_terpakai` passes
    /// through unchanged.
    pub async fn update(&self, id: i32, data: &UpdateTool) -> AppResult<Tool> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Tool>("SELECT * FROM tools WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tool with id {} not found", id)))?;

        let new_sekarang =
            reconcile_available(data.jumlah_sekarang, data.jumlah_awal, current.jumlah_awal);

        let tool = sqlx::query_as::<_, Tool>(
            r#"
            UPDATE tools
            SET nama_alat = $1, kode_alat = $2, merk = $3, tahun_pembuatan = $4,
                satuan = $5, kapasitas = $6, kondisi = $7, jumlah_awal = $8,
                jumlah_sekarang = $9, updated_at = NOW()
            WHERE id = $10
            RETURNING *
            "#,
        )
        .bind(&data.nama_alat)
        .bind(&data.kode_alat)
        .bind(&data.merk)
        .bind(&data.tahun_pembuatan)
        .bind(&data.satuan)
        .bind(&data.kapasitas)
        .bind(data.kondisi)
        .bind(data.jumlah_awal)
        .bind(new_sekarang)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(tool)
    }

    /// Delete a tool. Blocked while any of its units is still assigned to a
    /// project (foreign key on tool_instances).
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM tools WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;

        match result {
            Ok(r) if r.rows_affected() == 0 => {
                Err(AppError::NotFound(format!("Tool with id {} not found", id)))
            }
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                Err(AppError::Conflict(format!(
                    "Tool {} is still assigned to a project",
                    id
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Count all tools
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tools")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Sum the three quantity counters across all tools
    pub async fn sum_counters(&self) -> AppResult<(i64, i64, i64)> {
        let row: (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(jumlah_awal), 0)::bigint,
                   COALESCE(SUM(jumlah_sekarang), 0)::bigint,
                   COALESCE(SUM(jumlah_terpakai), 0)::bigint
            FROM tools
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
