//! 설정에 따라 표기법을 고르는 변환기

use crate::config::{RomanizationMode, RomanizerConfig};
use crate::core::converter::{self, Segment};
use crate::error::RomanizeError;

/// 표기법이 정해진 변환기
///
/// ```
/// use hangul_romanizer::{Romanizer, RomanizerConfig};
///
/// let romanizer = Romanizer::new(RomanizerConfig::default()).unwrap();
/// assert_eq!(romanizer.romanize("한국어"), "hangugeo");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Romanizer {
    config: RomanizerConfig,
}

impl Romanizer {
    /// 변환기 생성
    /// 구현되지 않은 표기법이면 `RomanizeError::UnsupportedMode`
    pub fn new(config: RomanizerConfig) -> Result<Self, RomanizeError> {
        match config.mode {
            RomanizationMode::RevisedRomanization => {
                log::debug!("변환기 생성: {:?}", config.mode);
                Ok(Self { config })
            }
            mode => Err(RomanizeError::UnsupportedMode(mode)),
        }
    }

    pub fn config(&self) -> &RomanizerConfig {
        &self.config
    }

    pub fn romanize(&self, text: &str) -> String {
        converter::romanize(text)
    }

    pub fn romanize_utf16(&self, text: &[u16]) -> String {
        converter::romanize_utf16(text)
    }

    pub fn explain(&self, text: &str) -> Vec<Segment> {
        converter::explain(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revised_romanization() {
        let romanizer = Romanizer::new(RomanizerConfig::default()).unwrap();
        assert_eq!(romanizer.romanize("한글"), "hangeul");
        assert_eq!(romanizer.config().mode, RomanizationMode::RevisedRomanization);
    }

    #[test]
    fn test_unsupported_mode() {
        let config = RomanizerConfig::default().with_mode(RomanizationMode::McCuneReischauer);
        assert!(matches!(
            Romanizer::new(config),
            Err(RomanizeError::UnsupportedMode(RomanizationMode::McCuneReischauer))
        ));
    }

    #[test]
    fn test_default_matches_free_function() {
        let romanizer = Romanizer::default();
        assert_eq!(romanizer.romanize("안녕하세요"), converter::romanize("안녕하세요"));
    }
}
