//! 한글을 국어의 로마자 표기법(Revised Romanization of Korean)으로 변환합니다.
//!
//! ```
//! assert_eq!(hangul_romanizer::romanize("안녕 hello!"), "annyeong hello!");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod romanizer;

pub use config::{load_config, save_config, try_load_config, RomanizationMode, RomanizerConfig};
pub use crate::core::converter::{explain, romanize, romanize_utf16, Segment};
pub use crate::core::phoneme::SyllableParts;
pub use crate::core::unicode::{decompose, is_hangul_syllable, Syllable};
pub use error::RomanizeError;
pub use romanizer::Romanizer;
