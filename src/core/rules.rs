//! 로마자 표기 규칙 테이블 (국어의 로마자 표기법)
//!
//! 기본 표기는 자모별 고정 테이블에서 찾고, 인접 자모에 따른 동화/연음은
//! 아래의 규칙 목록으로 덮어씁니다.
//!
//! - 초성 규칙: (현재 초성, 앞 글자 종성 목록, 표기)
//! - 종성 규칙: (현재 종성, 뒷 글자 초성 목록, 표기)
//!
//! 규칙은 인접한 자모 하나만 봅니다 (바이그램). 같은 (현재, 이웃) 쌍이 두 번
//! 나오면 안 됩니다.
//!
//! 뒷 모음은 보지 않으므로 ㄷ/ㅌ + ㅇ은 항상 구개음화됩니다 (같이 -> gachi는 맞지만
//! 받아 -> baja, 밭에 -> bache).

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::jamo::{Leading, Trailing, Vowel};

/// 초성 기본 표기
/// ㄱ ㄲ ㄴ ㄷ ㄸ ㄹ ㅁ ㅂ ㅃ ㅅ ㅆ ㅇ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ ㅎ
#[rustfmt::skip]
pub const LEADING_TABLE: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s",
    "ss", "", "j", "jj", "ch", "k", "t", "p", "h",
];

/// 중성 표기
/// ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ ㅗ ㅘ ㅙ ㅚ ㅛ ㅜ ㅝ ㅞ ㅟ ㅠ ㅡ ㅢ ㅣ
#[rustfmt::skip]
pub const VOWEL_TABLE: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa",
    "wae", "oe", "yo", "u", "wo", "we", "wi", "yu", "eu", "ui",
    "i",
];

/// 종성 기본 표기 (대표음)
/// ㄱ ㄲ ㄳ ㄴ ㄵ ㄶ ㄷ ㄹ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅁ ㅂ ㅄ ㅅ ㅆ ㅇ ㅈ ㅊ ㅋ ㅌ ㅍ ㅎ
#[rustfmt::skip]
pub const TRAILING_TABLE: [&str; 27] = [
    "k", "k", "k", "n", "n", "n", "d", "l", "k", "m",
    "l", "l", "l", "l", "l", "m", "p", "p", "t", "t",
    "ng", "t", "t", "k", "t", "p", "t",
];

/// 초성 규칙: (초성, 앞 글자 종성들, 표기)
pub type LeadingRule = (Leading, &'static [Trailing], &'static str);

/// 종성 규칙: (종성, 뒷 글자 초성들, 표기)
pub type TrailingRule = (Trailing, &'static [Leading], &'static str);

/// 앞 글자 종성에 따라 바뀌는 초성 표기
pub const LEADING_RULES: &[LeadingRule] = {
    use Trailing::*;
    &[
        // 격음화: ㄱ + ㅎ 계열 -> k
        (
            Leading::Giyeok,
            &[
                NieunHieut,
                RieulGiyeok,
                RieulMieum,
                RieulBieup,
                RieulSiot,
                RieulTieut,
                RieulPieup,
                RieulHieut,
                Hieut,
            ],
            "k",
        ),
        // 유음화
        (Leading::Nieun, &[Rieul, RieulHieut], "l"),
        (Leading::Digeut, &[NieunHieut, RieulTieut, RieulHieut, Hieut], "t"),
        // 비음화
        (
            Leading::Rieul,
            &[
                Giyeok,
                SsangGiyeok,
                GiyeokSiot,
                RieulGiyeok,
                RieulBieup,
                RieulPieup,
                Mieum,
                Bieup,
                BieupSiot,
                Ieung,
                Kieuk,
                Pieup,
            ],
            "n",
        ),
        (
            Leading::Rieul,
            &[
                Nieun,
                NieunJieut,
                NieunHieut,
                Digeut,
                Rieul,
                RieulMieum,
                RieulSiot,
                RieulTieut,
                RieulHieut,
                Siot,
                SsangSiot,
                Jieut,
                Chieut,
                Tieut,
                Hieut,
            ],
            "l",
        ),
        // 연음: 받침이 다음 음절 첫소리로 넘어감
        (Leading::Ieung, &[Giyeok, RieulGiyeok], "g"),
        (Leading::Ieung, &[SsangGiyeok], "kk"),
        (Leading::Ieung, &[GiyeokSiot, RieulSiot, BieupSiot, Siot], "s"),
        (Leading::Ieung, &[Nieun], "n"),
        (Leading::Ieung, &[Digeut, NieunJieut, Jieut], "j"),
        (Leading::Ieung, &[Rieul, RieulHieut], "r"),
        (Leading::Ieung, &[RieulMieum, Mieum], "m"),
        (Leading::Ieung, &[RieulBieup, Bieup], "b"),
        (Leading::Ieung, &[RieulTieut, Tieut, Chieut], "ch"),
        (Leading::Ieung, &[SsangSiot], "ss"),
        (Leading::Ieung, &[Kieuk], "k"),
        (Leading::Ieung, &[RieulPieup, Pieup], "p"),
        (Leading::Jieut, &[NieunHieut, RieulHieut, Hieut], "ch"),
        (Leading::SsangJieut, &[Jieut, Chieut], "ch"),
        (Leading::Chieut, &[Jieut, Chieut], "ch"),
        (Leading::Kieuk, &[Jieut, Chieut], "ch"),
        (Leading::Tieut, &[Jieut, Chieut], "ch"),
        (Leading::Hieut, &[SsangGiyeok], "kk"),
        (
            Leading::Hieut,
            &[
                Digeut, NieunJieut, RieulTieut, Siot, SsangSiot, Jieut, Chieut, Tieut,
            ],
            "ch",
        ),
        (Leading::Hieut, &[RieulGiyeok], "k"),
        (Leading::Hieut, &[Bieup, RieulBieup], "p"),
        (Leading::Hieut, &[RieulSiot], "s"),
        (Leading::Hieut, &[RieulHieut], "r"),
    ]
};

/// 뒷 글자 초성에 따라 바뀌는 종성 표기
pub const TRAILING_RULES: &[TrailingRule] = {
    use Leading::*;
    &[
        (Trailing::Giyeok, &[SsangGiyeok, Ieung, Kieuk], ""),
        (Trailing::Giyeok, &[Nieun, Mieum, Rieul], "ng"),
        (Trailing::SsangGiyeok, &[SsangGiyeok, Ieung, Kieuk, Hieut], ""),
        (Trailing::SsangGiyeok, &[Nieun, Mieum, Rieul], "ng"),
        (Trailing::GiyeokSiot, &[SsangGiyeok, Kieuk], ""),
        (Trailing::GiyeokSiot, &[Nieun, Mieum, Rieul], "ng"),
        (Trailing::Nieun, &[Rieul], "l"),
        (Trailing::Nieun, &[Ieung], ""),
        (Trailing::Digeut, &[Nieun, Mieum], "n"),
        (Trailing::Digeut, &[Rieul], "l"),
        (Trailing::Digeut, &[SsangDigeut, Ieung, Tieut, Hieut], ""),
        (Trailing::Rieul, &[Ieung], ""),
        (Trailing::RieulGiyeok, &[Giyeok, SsangGiyeok, Ieung, Hieut], "l"),
        (Trailing::RieulGiyeok, &[Nieun, Rieul, Mieum], "ng"),
        (Trailing::RieulMieum, &[Rieul, Mieum, Ieung], "l"),
        (Trailing::RieulBieup, &[Nieun, Rieul], "m"),
        (
            Trailing::RieulBieup,
            &[
                Digeut, SsangDigeut, Bieup, Siot, SsangSiot, Jieut, SsangJieut, Chieut, Kieuk,
                Tieut,
            ],
            "p",
        ),
        // ㅎ 앞에서는 ㅂ이 다음 초성으로 넘어가 격음이 됨 (넓히다 -> neolpida)
        (Trailing::RieulBieup, &[Hieut], "l"),
        (Trailing::RieulBieup, &[SsangBieup], ""),
        (Trailing::RieulPieup, &[Nieun, Rieul], "m"),
        (
            Trailing::RieulPieup,
            &[
                Digeut, SsangDigeut, Bieup, Siot, SsangSiot, Jieut, SsangJieut, Chieut, Kieuk,
                Tieut, Hieut,
            ],
            "p",
        ),
        (Trailing::RieulPieup, &[SsangBieup, Pieup], ""),
        (Trailing::RieulHieut, &[Hieut, Ieung], ""),
        (Trailing::Mieum, &[Ieung], ""),
        (Trailing::Bieup, &[Nieun, Rieul, Mieum], "m"),
        (Trailing::Bieup, &[SsangBieup, Ieung, Hieut], ""),
        (Trailing::BieupSiot, &[Nieun, Rieul, Mieum], "m"),
        (Trailing::BieupSiot, &[SsangBieup], ""),
        // ㅅ ㅆ ㅈ ㅊ 받침은 같은 규칙
        (Trailing::Siot, &[Nieun, Mieum], "n"),
        (Trailing::Siot, &[Rieul], "l"),
        (Trailing::Siot, &[SsangDigeut, Ieung, Tieut, Hieut], ""),
        (Trailing::SsangSiot, &[Nieun, Mieum], "n"),
        (Trailing::SsangSiot, &[Rieul], "l"),
        (Trailing::SsangSiot, &[SsangDigeut, Ieung, Tieut, Hieut], ""),
        (Trailing::Jieut, &[Nieun, Mieum], "n"),
        (Trailing::Jieut, &[Rieul], "l"),
        (Trailing::Jieut, &[SsangDigeut, Ieung, Tieut, Hieut], ""),
        (Trailing::Chieut, &[Nieun, Mieum], "n"),
        (Trailing::Chieut, &[Rieul], "l"),
        (Trailing::Chieut, &[SsangDigeut, Ieung, Tieut, Hieut], ""),
        (Trailing::Kieuk, &[SsangGiyeok, Ieung], ""),
        (Trailing::Kieuk, &[Nieun, Mieum, Rieul], "ng"),
        (Trailing::Tieut, &[Nieun, Mieum], "n"),
        (Trailing::Tieut, &[SsangDigeut, Ieung, Hieut], ""),
        (Trailing::Tieut, &[Rieul], "l"),
        (Trailing::Pieup, &[SsangBieup, Ieung], ""),
        (
            Trailing::Hieut,
            &[
                Giyeok,
                SsangGiyeok,
                Digeut,
                SsangDigeut,
                Ieung,
                Jieut,
                SsangJieut,
                Chieut,
                Kieuk,
                Tieut,
                Pieup,
                Hieut,
            ],
            "",
        ),
        (Trailing::Hieut, &[Nieun, Mieum, Rieul], "n"),
    ]
};

lazy_static! {
    /// (초성, 앞 글자 종성) -> 표기
    static ref LEADING_OVERRIDES: HashMap<(Leading, Trailing), &'static str> = {
        let mut map = HashMap::new();
        for &(leading, previous, latin) in LEADING_RULES {
            for &trailing in previous {
                map.insert((leading, trailing), latin);
            }
        }
        map
    };

    /// (종성, 뒷 글자 초성) -> 표기
    static ref TRAILING_OVERRIDES: HashMap<(Trailing, Leading), &'static str> = {
        let mut map = HashMap::new();
        for &(trailing, next, latin) in TRAILING_RULES {
            for &leading in next {
                map.insert((trailing, leading), latin);
            }
        }
        map
    };
}

/// 앞 글자 종성에 의한 초성 표기 변경 (규칙이 없으면 None)
pub fn leading_override(leading: Leading, previous: Trailing) -> Option<&'static str> {
    LEADING_OVERRIDES.get(&(leading, previous)).copied()
}

/// 뒷 글자 초성에 의한 종성 표기 변경 (규칙이 없으면 None)
pub fn trailing_override(trailing: Trailing, next: Leading) -> Option<&'static str> {
    TRAILING_OVERRIDES.get(&(trailing, next)).copied()
}

/// 초성 표기
/// - previous: 앞 글자 종성 (문자열 처음이거나 종성이 없으면 None)
pub fn leading_romanization(leading: Leading, previous: Option<Trailing>) -> &'static str {
    previous
        .and_then(|t| leading_override(leading, t))
        .unwrap_or(LEADING_TABLE[leading.index()])
}

/// 중성 표기 (문맥 무관)
pub fn vowel_romanization(vowel: Vowel) -> &'static str {
    VOWEL_TABLE[vowel.index()]
}

/// 종성 표기
/// - trailing: 현재 종성 (없으면 빈 문자열)
/// - next: 뒷 글자 초성 (문자열 끝이거나 한글이 아니면 None)
pub fn trailing_romanization(trailing: Option<Trailing>, next: Option<Leading>) -> &'static str {
    let Some(trailing) = trailing else {
        return "";
    };
    next.and_then(|l| trailing_override(trailing, l))
        .unwrap_or(TRAILING_TABLE[trailing.index()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_leading_rules_have_no_duplicate_pairs() {
        let mut seen = HashSet::new();
        for &(leading, previous, _) in LEADING_RULES {
            for &trailing in previous {
                assert!(
                    seen.insert((leading, trailing)),
                    "duplicate leading rule: {:?} after {:?}",
                    leading,
                    trailing
                );
            }
        }
    }

    #[test]
    fn test_trailing_rules_have_no_duplicate_pairs() {
        let mut seen = HashSet::new();
        for &(trailing, next, _) in TRAILING_RULES {
            for &leading in next {
                assert!(
                    seen.insert((trailing, leading)),
                    "duplicate trailing rule: {:?} before {:?}",
                    trailing,
                    leading
                );
            }
        }
    }

    #[test]
    fn test_base_tables() {
        assert_eq!(LEADING_TABLE[Leading::Giyeok.index()], "g");
        assert_eq!(LEADING_TABLE[Leading::Ieung.index()], "");
        assert_eq!(LEADING_TABLE[Leading::Chieut.index()], "ch");
        assert_eq!(vowel_romanization(Vowel::Eo), "eo");
        assert_eq!(vowel_romanization(Vowel::Ui), "ui");
        assert_eq!(TRAILING_TABLE[Trailing::Ieung.index()], "ng");
        assert_eq!(TRAILING_TABLE[Trailing::Hieut.index()], "t");
    }

    #[test]
    fn test_leading_without_previous() {
        // 문자열 처음: 규칙 적용 없음
        for leading in Leading::ALL {
            assert_eq!(
                leading_romanization(leading, None),
                LEADING_TABLE[leading.index()]
            );
        }
    }

    #[test]
    fn test_leading_overrides() {
        assert_eq!(leading_romanization(Leading::Giyeok, Some(Trailing::Hieut)), "k");
        assert_eq!(leading_romanization(Leading::Giyeok, Some(Trailing::Nieun)), "g");
        assert_eq!(leading_romanization(Leading::Nieun, Some(Trailing::Rieul)), "l");
        assert_eq!(leading_romanization(Leading::Digeut, Some(Trailing::Hieut)), "t");
        assert_eq!(leading_romanization(Leading::Rieul, Some(Trailing::Nieun)), "l");
        assert_eq!(leading_romanization(Leading::Rieul, Some(Trailing::Giyeok)), "n");
        assert_eq!(leading_romanization(Leading::Ieung, Some(Trailing::Giyeok)), "g");
        assert_eq!(leading_romanization(Leading::Ieung, Some(Trailing::Ieung)), "");
        assert_eq!(leading_romanization(Leading::Jieut, Some(Trailing::Hieut)), "ch");
        assert_eq!(leading_romanization(Leading::Hieut, Some(Trailing::Bieup)), "p");
        assert_eq!(leading_romanization(Leading::Hieut, Some(Trailing::NieunJieut)), "ch");
    }

    #[test]
    fn test_trailing_without_next() {
        // 문자열 끝: 대표음
        for trailing in Trailing::ALL {
            assert_eq!(
                trailing_romanization(Some(trailing), None),
                TRAILING_TABLE[trailing.index()]
            );
        }
        assert_eq!(trailing_romanization(None, None), "");
        assert_eq!(trailing_romanization(None, Some(Leading::Rieul)), "");
    }

    #[test]
    fn test_trailing_overrides() {
        assert_eq!(trailing_romanization(Some(Trailing::Giyeok), Some(Leading::Ieung)), "");
        assert_eq!(trailing_romanization(Some(Trailing::Giyeok), Some(Leading::Nieun)), "ng");
        assert_eq!(trailing_romanization(Some(Trailing::Giyeok), Some(Leading::Giyeok)), "k");
        assert_eq!(trailing_romanization(Some(Trailing::Nieun), Some(Leading::Rieul)), "l");
        assert_eq!(trailing_romanization(Some(Trailing::Rieul), Some(Leading::Ieung)), "");
        assert_eq!(trailing_romanization(Some(Trailing::RieulGiyeok), Some(Leading::Ieung)), "l");
        assert_eq!(trailing_romanization(Some(Trailing::Bieup), Some(Leading::Nieun)), "m");
        assert_eq!(trailing_romanization(Some(Trailing::Hieut), Some(Leading::Digeut)), "");
        assert_eq!(trailing_romanization(Some(Trailing::RieulBieup), Some(Leading::Hieut)), "l");
        assert_eq!(trailing_romanization(Some(Trailing::RieulBieup), Some(Leading::Digeut)), "p");
    }

    #[test]
    fn test_override_lookup() {
        assert_eq!(leading_override(Leading::Nieun, Trailing::RieulHieut), Some("l"));
        assert_eq!(leading_override(Leading::Mieum, Trailing::Giyeok), None);
        assert_eq!(trailing_override(Trailing::Pieup, Leading::SsangBieup), Some(""));
        assert_eq!(trailing_override(Trailing::Ieung, Leading::Ieung), None);
    }
}
