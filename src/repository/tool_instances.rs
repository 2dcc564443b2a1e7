//! Tool instances repository: the assignment ledger
//!
//! The only writer of the tool quantity counters. Every assignment or
//! removal adjusts `jumlah_sekarang`/`jumlah_terpakai` in the same
//! transaction as the ledger row, so the stock invariant
//! `jumlah_sekarang + jumlah_terpakai == jumlah_awal` cannot be broken by a
//! partial failure.

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        tool::Tool,
        tool_instance::{CreateAssignment, ToolInstance, ToolInstanceDetails},
    },
};

/// Postgres error code for foreign key violations
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Clone)]
pub struct ToolInstancesRepository {
    pool: Pool<Postgres>,
}

impl ToolInstancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List a project's assignments with the related tool embedded
    pub async fn list_for_project(&self, project_id: i32) -> AppResult<Vec<ToolInstanceDetails>> {
        let rows = sqlx::query(
            r#"
            SELECT ti.id, ti.project_id,
                   t.id as tool_id, t.nama_alat, t.kode_alat, t.merk, t.tahun_pembuatan,
                   t.satuan, t.kapasitas, t.kondisi, t.jumlah_awal, t.jumlah_sekarang,
                   t.jumlah_terpakai, t.created_at, t.updated_at
            FROM tool_instances ti
            JOIN tools t ON ti.tool_id = t.id
            WHERE ti.project_id = $1
            ORDER BY ti.id
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::new();
        for row in rows {
            result.push(ToolInstanceDetails {
                id: row.get("id"),
                project_id: row.get("project_id"),
                tool: Tool {
                    id: row.get("tool_id"),
                    nama_alat: row.get("nama_alat"),
                    kode_alat: row.get("kode_alat"),
                    merk: row.get("merk"),
                    tahun_pembuatan: row.get("tahun_pembuatan"),
                    satuan: row.get("satuan"),
                    kapasitas: row.get("kapasitas"),
                    kondisi: row.get("kondisi"),
                    jumlah_awal: row.get("jumlah_awal"),
                    jumlah_sekarang: row.get("jumlah_sekarang"),
                    jumlah_terpakai: row.get("jumlah_terpakai"),
                    created_at: row.get("created_at"),
                    updated_at: row.get("updated_at"),
                },
            });
        }

        Ok(result)
    }

    /// Check out one unit of a tool to a project.
    ///
    /// Inserts the ledger row and adjusts the tool counters atomically.
    /// No lower bound is enforced on `jumlah_sekarang`; over-assignment is
    /// the operator's call.
    pub async fn assign(&self, data: &CreateAssignment) -> AppResult<ToolInstance> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query_as::<_, ToolInstance>(
            r#"
            INSERT INTO tool_instances (project_id, tool_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(data.project_id)
        .bind(data.tool_id)
        .fetch_one(&mut *tx)
        .await;

        // The referenced tool or project can disappear between the caller's
        // existence check and this insert
        let instance = match result {
            Ok(instance) => instance,
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                return Err(AppError::NotFound(format!(
                    "Tool {} or project {} not found",
                    data.tool_id, data.project_id
                )));
            }
            Err(e) => return Err(e.into()),
        };

        let updated = sqlx::query(
            r#"
            UPDATE tools
            SET jumlah_sekarang = jumlah_sekarang - 1,
                jumlah_terpakai = jumlah_terpakai + 1,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(data.tool_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            // Dropping the transaction rolls back the ledger insert
            return Err(AppError::NotFound(format!(
                "Tool with id {} not found",
                data.tool_id
            )));
        }

        tx.commit().await?;
        Ok(instance)
    }

    /// Return one unit of a tool from a project.
    ///
    /// Deletes the ledger row and reverses the counter adjustment
    /// atomically. A second call on the same id fails with not-found and
    /// leaves the counters alone.
    pub async fn unassign(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let instance = sqlx::query_as::<_, ToolInstance>(
            "DELETE FROM tool_instances WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tool instance with id {} not found", id)))?;

        sqlx::query(
            r#"
            UPDATE tools
            SET jumlah_sekarang = jumlah_sekarang + 1,
                jumlah_terpakai = jumlah_terpakai - 1,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(instance.tool_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }
}
