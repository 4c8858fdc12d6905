//! 음절 단위 로마자 변환
//!
//! 앞 글자의 종성과 뒷 글자의 초성을 보고 현재 음절의 표기를 결정합니다.

use std::fmt;

use crate::core::rules::{
    leading_override, leading_romanization, trailing_override, trailing_romanization,
    vowel_romanization,
};
use crate::core::unicode::Syllable;

/// 한 음절의 로마자 표기 구성 요소
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllableParts {
    pub leading: &'static str,
    pub vowel: &'static str,
    pub trailing: &'static str,
    /// 앞 글자 종성 때문에 초성 표기가 바뀌었는지
    pub leading_overridden: bool,
    /// 뒷 글자 초성 때문에 종성 표기가 바뀌었는지
    pub trailing_overridden: bool,
}

impl SyllableParts {
    /// 초성 + 중성 + 종성을 이어 붙인 표기
    pub fn to_latin(&self) -> String {
        let mut s =
            String::with_capacity(self.leading.len() + self.vowel.len() + self.trailing.len());
        s.push_str(self.leading);
        s.push_str(self.vowel);
        s.push_str(self.trailing);
        s
    }
}

impl fmt::Display for SyllableParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.leading, self.vowel, self.trailing)
    }
}

/// 음절 표기를 구성 요소별로 계산
///
/// - previous/next: 앞/뒤 글자 (문자열 경계면 None)
/// - 한글 음절이 아니면 None
///
/// 이웃이 한글 음절이 아니거나 받침이 없으면 경계와 같이 취급되어 규칙이 적용되지 않습니다.
pub fn romanize_parts(
    current: &Syllable,
    previous: Option<&Syllable>,
    next: Option<&Syllable>,
) -> Option<SyllableParts> {
    let Syllable::Hangul {
        codepoint,
        leading,
        vowel,
        trailing,
    } = *current
    else {
        return None;
    };

    let previous_trailing = previous.and_then(Syllable::trailing);
    let next_leading = next.and_then(Syllable::leading);

    let leading_overridden = previous_trailing
        .and_then(|t| leading_override(leading, t))
        .is_some();
    let trailing_overridden = match (trailing, next_leading) {
        (Some(t), Some(l)) => trailing_override(t, l).is_some(),
        _ => false,
    };

    if let (true, Some(prev)) = (leading_overridden, previous_trailing) {
        log::trace!(
            "{} [{}]: 초성 {} 동화 (앞 종성 {})",
            codepoint,
            current.jamo(),
            leading.jamo(),
            prev.jamo()
        );
    }
    if let (true, Some(cur), Some(next)) = (trailing_overridden, trailing, next_leading) {
        log::trace!(
            "{} [{}]: 종성 {} 동화 (뒤 초성 {})",
            codepoint,
            current.jamo(),
            cur.jamo(),
            next.jamo()
        );
    }

    Some(SyllableParts {
        leading: leading_romanization(leading, previous_trailing),
        vowel: vowel_romanization(vowel),
        trailing: trailing_romanization(trailing, next_leading),
        leading_overridden,
        trailing_overridden,
    })
}

/// 음절 하나를 로마자로 변환
///
/// 한글 음절이 아닌 문자는 그대로 반환합니다.
pub fn romanize_syllable(
    current: &Syllable,
    previous: Option<&Syllable>,
    next: Option<&Syllable>,
) -> String {
    match romanize_parts(current, previous, next) {
        Some(parts) => parts.to_latin(),
        None => current.codepoint().to_string(),
    }
}
