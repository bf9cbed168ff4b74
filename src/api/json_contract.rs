use serde::{Deserialize, Serialize};

use crate::error::{MoodError, MoodResult};
use crate::render::Renderer;

use super::{MoodChartEngine, MoodLayout};

pub const MOOD_LAYOUT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLayoutJsonContractV1 {
    pub schema_version: u32,
    pub layout: MoodLayout,
}

impl MoodLayout {
    pub fn to_json_contract_v1_pretty(&self) -> MoodResult<String> {
        let payload = MoodLayoutJsonContractV1 {
            schema_version: MOOD_LAYOUT_JSON_SCHEMA_V1,
            layout: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            MoodError::InvalidData(format!("failed to serialize layout contract v1: {e}"))
        })
    }

    /// Parses either a bare layout or a versioned v1 contract.
    ///
    /// Layouts whose per-entry vectors disagree in length are rejected.
    pub fn from_json_compat_str(input: &str) -> MoodResult<Self> {
        if let Ok(layout) = serde_json::from_str::<MoodLayout>(input) {
            layout.validate()?;
            return Ok(layout);
        }
        let payload: MoodLayoutJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            MoodError::InvalidData(format!("failed to parse layout json payload: {e}"))
        })?;
        if payload.schema_version != MOOD_LAYOUT_JSON_SCHEMA_V1 {
            return Err(MoodError::InvalidData(format!(
                "unsupported layout schema version: {}",
                payload.schema_version
            )));
        }
        payload.layout.validate()?;
        Ok(payload.layout)
    }
}

impl<R: Renderer> MoodChartEngine<R> {
    pub fn layout_json_contract_v1_pretty(&mut self) -> MoodResult<String> {
        self.layout().to_json_contract_v1_pretty()
    }
}
