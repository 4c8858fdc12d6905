//! 한글 음절 분해와 로마자 표기 규칙

pub mod converter;
pub mod jamo;
pub mod phoneme;
pub mod rules;
pub mod unicode;
