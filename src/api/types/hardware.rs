use serde::{Deserialize, Serialize};

/// Static snapshot returned by `GET /v1/hardware`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareInformation {
    pub cpu: CpuInformation,
    pub os: OsInformation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpus: Option<Vec<GpuInformation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<RamInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageInformation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuInformation {
    pub arch: String,
    pub cores: u32,
    /// Supported instruction set extensions, e.g. `avx2`, `fma`.
    pub instructions: Vec<String>,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsInformation {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuInformation {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// MiB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_vram: Option<u64>,
    /// MiB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_vram: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<GpuAdditionalInformation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuAdditionalInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute_cap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RamInformation {
    /// MiB
    pub available: u64,
    /// MiB
    pub total: u64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageInformation {
    /// GiB
    pub available: u64,
    /// GiB
    pub total: u64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Body of `POST /v1/hardware/activate`: indices of the GPUs to enable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivateGpusRequest {
    pub gpus: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivateGpusResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated_gpus: Option<Vec<u32>>,
}
