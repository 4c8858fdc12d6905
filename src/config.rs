//! 변환 설정 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::RomanizeError;

/// 로마자 표기법
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RomanizationMode {
    /// 국어의 로마자 표기법 (2000)
    #[default]
    RevisedRomanization,
    /// 매큔-라이샤워 표기법 (미구현)
    #[serde(rename = "mccune_reischauer")]
    McCuneReischauer,
}

/// 변환 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RomanizerConfig {
    /// 사용할 표기법
    #[serde(default = "default_mode")]
    pub mode: RomanizationMode,
}

fn default_mode() -> RomanizationMode {
    RomanizationMode::RevisedRomanization
}

impl Default for RomanizerConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
        }
    }
}

impl RomanizerConfig {
    /// JSON 문자열에서 설정 생성
    pub fn from_json(json: &str) -> Result<Self, RomanizeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_mode(mut self, mode: RomanizationMode) -> Self {
        self.mode = mode;
        self
    }
}

/// 설정 파일 로드
pub fn try_load_config(path: impl AsRef<Path>) -> Result<RomanizerConfig, RomanizeError> {
    let content = fs::read_to_string(path)?;
    RomanizerConfig::from_json(&content)
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config(path: impl AsRef<Path>) -> RomanizerConfig {
    let path = path.as_ref();
    try_load_config(path).unwrap_or_else(|e| {
        log::warn!("설정 로드 실패, 기본값 사용 ({}): {}", path.display(), e);
        RomanizerConfig::default()
    })
}

/// 설정 파일 저장
pub fn save_config(path: impl AsRef<Path>, config: &RomanizerConfig) -> Result<(), RomanizeError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RomanizerConfig::default();
        assert_eq!(config.mode, RomanizationMode::RevisedRomanization);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = RomanizerConfig::default().with_mode(RomanizationMode::McCuneReischauer);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"mode":"mccune_reischauer"}"#);
        let parsed = RomanizerConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config = RomanizerConfig::from_json("{}").unwrap();
        assert_eq!(config.mode, RomanizationMode::RevisedRomanization);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            RomanizerConfig::from_json("{\"mode\": 3}"),
            Err(RomanizeError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = std::env::temp_dir().join("hangul-romanizer-missing/none.json");
        assert!(matches!(try_load_config(&path), Err(RomanizeError::Io(_))));
        assert_eq!(load_config(&path), RomanizerConfig::default());
    }
}
