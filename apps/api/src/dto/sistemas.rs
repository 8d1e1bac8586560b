use sedapal_application::SystemRecord;
use serde::Serialize;
use ts_rs::TS;

/// API representation of an administrable system.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/system-response.ts"
)]
pub struct SystemResponse {
    #[ts(type = "number")]
    pub id: i64,
    pub desc_sistema: String,
    pub abrev: Option<String>,
    pub administrador: Option<String>,
    pub suplente: Option<String>,
    pub estado: i32,
}

impl From<SystemRecord> for SystemResponse {
    fn from(value: SystemRecord) -> Self {
        Self {
            id: value.id.value(),
            desc_sistema: value.description,
            abrev: value.abbreviation,
            administrador: value.administrator,
            suplente: value.deputy,
            estado: value.status,
        }
    }
}
