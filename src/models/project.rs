//! Project ("proyek") model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Project record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Project {
    pub id: i32,
    /// Project name
    pub nama_proyek: String,
    /// Short project code (e.g. "PR-01")
    pub kode_proyek: String,
    /// Start date, kept as the free-form string the form submits
    pub tanggal_mulai: String,
    /// End date
    pub tanggal_selesai: String,
    /// Completion flag
    #[serde(rename = "isDone")]
    pub is_done: bool,
    /// Monetary valuation, stored as a string
    pub valuasi: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create project request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "nama proyek tidak boleh kosong"))]
    pub nama_proyek: String,
    #[validate(length(min = 1, max = 7, message = "kode proyek harus 1-7 karakter"))]
    pub kode_proyek: String,
    #[validate(length(min = 1, message = "tanggal mulai tidak boleh kosong"))]
    pub tanggal_mulai: String,
    #[validate(length(min = 1, message = "tanggal selesai tidak boleh kosong"))]
    pub tanggal_selesai: String,
    #[validate(length(min = 1, message = "valuasi tidak boleh kosong"))]
    pub valuasi: String,
}

/// Update project request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProject {
    #[validate(length(min = 1, message = "nama proyek tidak boleh kosong"))]
    pub nama_proyek: String,
    #[validate(length(min = 1, max = 7, message = "kode proyek harus 1-7 karakter"))]
    pub kode_proyek: String,
    #[validate(length(min = 1, message = "tanggal mulai tidak boleh kosong"))]
    pub tanggal_mulai: String,
    #[validate(length(min = 1, message = "tanggal selesai tidak boleh kosong"))]
    pub tanggal_selesai: String,
    #[serde(rename = "isDone")]
    pub is_done: bool,
    #[validate(length(min = 1, message = "valuasi tidak boleh kosong"))]
    pub valuasi: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn valid_create() -> CreateProject {
        CreateProject {
            nama_proyek: "Pembangunan Jembatan".to_string(),
            kode_proyek: "PR-01".to_string(),
            tanggal_mulai: "2024-01-01".to_string(),
            tanggal_selesai: "2024-06-30".to_string(),
            valuasi: "150000000".to_string(),
        }
    }

    #[test]
    fn create_project_valid() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn kode_proyek_boundary() {
        let mut data = valid_create();
        data.kode_proyek = "PR-0001".to_string();
        assert!(data.validate().is_ok());

        data.kode_proyek = "PR-00001".to_string();
        assert!(data.validate().is_err());
    }

    #[test]
    fn dates_and_valuation_required() {
        let mut data = valid_create();
        data.tanggal_mulai = "".to_string();
        assert!(data.validate().is_err());

        let mut data = valid_create();
        data.valuasi = "".to_string();
        assert!(data.validate().is_err());
    }

    #[test]
    fn is_done_uses_camel_case_wire_name() {
        let json = r#"{
            "nama_proyek": "P",
            "kode_proyek": "PR-01",
            "tanggal_mulai": "2024-01-01",
            "tanggal_selesai": "2024-06-30",
            "isDone": true,
            "valuasi": "1000"
        }"#;
        let data: UpdateProject = serde_json::from_str(json).unwrap();
        assert!(data.is_done);
    }
}
