//! 유니코드 한글 음절 분해/조합

use crate::core::jamo::{Leading, Trailing, Vowel};

/// 한글 음절 시작 코드포인트 (가)
pub const SYLLABLE_BASE: u32 = 0xAC00;

/// 초성 개수
pub const LEADING_COUNT: u32 = 19;
/// 중성 개수
pub const VOWEL_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const TRAILING_COUNT: u32 = 28;

/// 완성형 한글 음절 수 (11,172)
pub const SYLLABLE_COUNT: u32 = LEADING_COUNT * VOWEL_COUNT * TRAILING_COUNT;

/// 입력 문자 하나에 대응하는 음절
///
/// 완성형 한글이면 초성/중성/종성으로 분해된 상태로, 아니면 원래 문자만 가집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syllable {
    Hangul {
        codepoint: char,
        leading: Leading,
        vowel: Vowel,
        trailing: Option<Trailing>,
    },
    Other(char),
}

impl Syllable {
    /// 원래 문자
    pub fn codepoint(&self) -> char {
        match *self {
            Syllable::Hangul { codepoint, .. } => codepoint,
            Syllable::Other(c) => c,
        }
    }

    pub fn is_hangul(&self) -> bool {
        matches!(self, Syllable::Hangul { .. })
    }

    /// 초성 (한글 음절인 경우만)
    pub fn leading(&self) -> Option<Leading> {
        match *self {
            Syllable::Hangul { leading, .. } => Some(leading),
            Syllable::Other(_) => None,
        }
    }

    pub fn vowel(&self) -> Option<Vowel> {
        match *self {
            Syllable::Hangul { vowel, .. } => Some(vowel),
            Syllable::Other(_) => None,
        }
    }

    /// 호환용 자모로 풀어 쓴 문자열 (한 -> "ㅎㅏㄴ")
    /// 한글 음절이 아니면 원래 문자
    pub fn jamo(&self) -> String {
        match *self {
            Syllable::Hangul {
                leading,
                vowel,
                trailing,
                ..
            } => {
                let mut s = String::with_capacity(9);
                s.push(leading.jamo());
                s.push(vowel.jamo());
                if let Some(t) = trailing {
                    s.push(t.jamo());
                }
                s
            }
            Syllable::Other(c) => c.to_string(),
        }
    }

    /// 종성 (한글 음절이 아니거나 종성이 없으면 None)
    pub fn trailing(&self) -> Option<Trailing> {
        match *self {
            Syllable::Hangul { trailing, .. } => trailing,
            Syllable::Other(_) => None,
        }
    }
}

/// 완성형 한글(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (SYLLABLE_BASE..SYLLABLE_BASE + SYLLABLE_COUNT).contains(&(c as u32))
}

/// 문자 하나를 음절로 분해
///
/// 완성형 한글 범위 밖의 문자는 `Syllable::Other`로 그대로 둡니다.
pub fn decompose(c: char) -> Syllable {
    if !is_hangul_syllable(c) {
        return Syllable::Other(c);
    }
    let offset = c as u32 - SYLLABLE_BASE;
    let leading = offset / (VOWEL_COUNT * TRAILING_COUNT);
    let vowel = (offset % (VOWEL_COUNT * TRAILING_COUNT)) / TRAILING_COUNT;
    let slot = offset % TRAILING_COUNT;

    // 범위 검사를 통과했으므로 각 인덱스는 항상 유효
    match (Leading::from_index(leading), Vowel::from_index(vowel)) {
        (Some(leading), Some(vowel)) => Syllable::Hangul {
            codepoint: c,
            leading,
            vowel,
            trailing: Trailing::from_slot(slot),
        },
        _ => Syllable::Other(c),
    }
}

/// 초성/중성/종성으로 완성형 한글 생성
pub fn compose(leading: Leading, vowel: Vowel, trailing: Option<Trailing>) -> char {
    let slot = trailing.map_or(0, Trailing::slot);
    let code = SYLLABLE_BASE
        + (leading.index() as u32 * VOWEL_COUNT + vowel.index() as u32) * TRAILING_COUNT
        + slot;
    char::from_u32(code).unwrap_or('\u{FFFD}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose() {
        assert_eq!(
            decompose('가'),
            Syllable::Hangul {
                codepoint: '가',
                leading: Leading::Giyeok,
                vowel: Vowel::A,
                trailing: None,
            }
        );
        assert_eq!(
            decompose('한'),
            Syllable::Hangul {
                codepoint: '한',
                leading: Leading::Hieut,
                vowel: Vowel::A,
                trailing: Some(Trailing::Nieun),
            }
        );
        assert_eq!(decompose('글').trailing(), Some(Trailing::Rieul));
        assert_eq!(decompose('읽').trailing(), Some(Trailing::RieulGiyeok));
        assert_eq!(decompose('한').jamo(), "ㅎㅏㄴ");
        assert_eq!(decompose('가').jamo(), "ㄱㅏ");
    }

    #[test]
    fn test_range_edges() {
        // 가 (U+AC00), 힣 (U+D7A3)
        assert!(is_hangul_syllable('\u{AC00}'));
        assert!(is_hangul_syllable('\u{D7A3}'));
        assert!(!is_hangul_syllable('\u{ABFF}'));
        assert!(!is_hangul_syllable('\u{D7A4}'));

        let last = decompose('힣');
        assert_eq!(last.leading(), Some(Leading::Hieut));
        assert_eq!(last.vowel(), Some(Vowel::I));
        assert_eq!(last.trailing(), Some(Trailing::Hieut));
    }

    #[test]
    fn test_non_hangul() {
        assert_eq!(decompose('a'), Syllable::Other('a'));
        assert_eq!(decompose('1'), Syllable::Other('1'));
        // 낱자모는 완성형이 아님
        assert_eq!(decompose('ㄱ'), Syllable::Other('ㄱ'));
        assert_eq!(decompose('😀'), Syllable::Other('😀'));
        assert!(!decompose('ㅏ').is_hangul());
        assert_eq!(decompose('x').leading(), None);
        assert_eq!(decompose('x').codepoint(), 'x');
        assert_eq!(decompose('x').jamo(), "x");
    }

    #[test]
    fn test_compose() {
        assert_eq!(compose(Leading::Giyeok, Vowel::A, None), '가');
        assert_eq!(compose(Leading::Giyeok, Vowel::A, Some(Trailing::Giyeok)), '각');
        assert_eq!(compose(Leading::Hieut, Vowel::A, Some(Trailing::Nieun)), '한');
        assert_eq!(compose(Leading::Giyeok, Vowel::Eu, Some(Trailing::Rieul)), '글');
    }

    #[test]
    fn test_decompose_compose_all() {
        for code in SYLLABLE_BASE..SYLLABLE_BASE + SYLLABLE_COUNT {
            let c = char::from_u32(code).unwrap();
            match decompose(c) {
                Syllable::Hangul {
                    leading,
                    vowel,
                    trailing,
                    ..
                } => assert_eq!(compose(leading, vowel, trailing), c),
                Syllable::Other(_) => panic!("{:?} should be hangul", c),
            }
        }
    }
}
