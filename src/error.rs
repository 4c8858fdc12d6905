//! 에러 타입
//!
//! 변환 자체는 실패하지 않으며, 설정 로드/저장과 변환기 생성에서만 에러가 발생합니다.

use thiserror::Error;

use crate::config::RomanizationMode;

#[derive(Debug, Error)]
pub enum RomanizeError {
    /// 아직 구현되지 않은 표기법
    #[error("지원하지 않는 표기법: {0:?}")]
    UnsupportedMode(RomanizationMode),
    /// 설정 파일 읽기/쓰기 실패
    #[error("설정 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 JSON 파싱/직렬화 실패
    #[error("설정 JSON 오류: {0}")]
    Config(#[from] serde_json::Error),
}
