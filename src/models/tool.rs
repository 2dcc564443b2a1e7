//! Tool ("alat") model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Physical condition of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "kondisi")]
pub enum ToolCondition {
    Baik,
    Perbaikan,
    Rusak,
}

impl std::fmt::Display for ToolCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ToolCondition::Baik => "Baik",
            ToolCondition::Perbaikan => "Perbaikan",
            ToolCondition::Rusak => "Rusak",
        };
        write!(f, "{}", label)
    }
}

/// Tool record
///
/// The three quantity counters are related by the stock invariant
/// `jumlah_sekarang + jumlah_terpakai == jumlah_awal`, maintained by the
/// assignment ledger.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tool {
    pub id: i32,
    /// Tool name (e.g. "Palu")
    pub nama_alat: String,
    /// Short warehouse code (e.g. "AB-01")
    pub kode_alat: String,
    /// Brand (e.g. "Krisbow")
    pub merk: String,
    /// Four-digit year of manufacture
    pub tahun_pembuatan: String,
    /// Counting unit (e.g. "Buah")
    pub satuan: String,
    /// Capacity description (e.g. "1 Ton")
    pub kapasitas: Option<String>,
    pub kondisi: ToolCondition,
    /// Initial stock quantity
    pub jumlah_awal: i32,
    /// Quantity currently available in the warehouse
    pub jumlah_sekarang: i32,
    /// Quantity currently checked out to projects
    pub jumlah_terpakai: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create tool request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTool {
    #[validate(length(min = 1, message = "nama alat tidak boleh kosong"))]
    pub nama_alat: String,
    #[validate(length(min = 1, max = 7, message = "kode alat harus 1-7 karakter"))]
    pub kode_alat: String,
    #[validate(length(min = 1, message = "merk tidak boleh kosong"))]
    pub merk: String,
    #[validate(length(equal = 4, message = "tahun pembuatan harus 4 karakter"))]
    pub tahun_pembuatan: String,
    #[validate(length(min = 1, message = "satuan tidak boleh kosong"))]
    pub satuan: String,
    pub kapasitas: Option<String>,
    pub kondisi: ToolCondition,
    #[validate(range(min = 1, message = "jumlah awal harus minimal 1"))]
    pub jumlah_awal: i32,
}

/// Update tool request
///
/// Mirrors the edit form: `jumlah_sekarang` is submitted as loaded (the
/// field is read-only in the form) and the stored value is reconciled with
/// the stock delta; `jumlah_terpakai` is never part of an update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTool {
    #[validate(length(min = 1, message = "nama alat tidak boleh kosong"))]
    pub nama_alat: String,
    #[validate(length(min = 1, max = 7, message = "kode alat harus 1-7 karakter"))]
    pub kode_alat: String,
    #[validate(length(min = 1, message = "merk tidak boleh kosong"))]
    pub merk: String,
    #[validate(length(equal = 4, message = "tahun pembuatan harus 4 karakter"))]
    pub tahun_pembuatan: String,
    #[validate(length(min = 1, message = "satuan tidak boleh kosong"))]
    pub satuan: String,
    pub kapasitas: Option<String>,
    pub kondisi: ToolCondition,
    #[validate(range(min = 1, message = "jumlah awal harus minimal 1"))]
    pub jumlah_awal: i32,
    /// Available quantity as it was loaded into the edit form
    pub jumlah_sekarang: i32,
}

/// Reconcile the available counter when the total stock is edited.
///
/// An operator changing `jumlah_awal` expects the difference to be absorbed
/// by the available counter, leaving `jumlah_terpakai` untouched:
/// `sekarang' = sekarang + (awal' - awal)`.
pub fn reconcile_available(
    submitted_sekarang: i32,
    submitted_awal: i32,
    stored_awal: i32,
) -> i32 {
    submitted_sekarang + (submitted_awal - stored_awal)
}
