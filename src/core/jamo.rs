//! 자모(초성/중성/종성) 열거형
//!
//! 유니코드 조합 순서를 그대로 따르므로 `index()` 값이 곧 음절 분해 인덱스입니다.
//!
//! 초성 순서 (19개):
//! ㄱ ㄲ ㄴ ㄷ ㄸ ㄹ ㅁ ㅂ ㅃ ㅅ ㅆ ㅇ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ ㅎ
//!
//! 중성 순서 (21개):
//! ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ ㅗ ㅘ ㅙ ㅚ ㅛ ㅜ ㅝ ㅞ ㅟ ㅠ ㅡ ㅢ ㅣ
//!
//! 종성 순서 (27개, 종성 없음은 `Option::None`):
//! ㄱ ㄲ ㄳ ㄴ ㄵ ㄶ ㄷ ㄹ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅁ ㅂ ㅄ ㅅ ㅆ ㅇ ㅈ ㅊ ㅋ ㅌ ㅍ ㅎ

/// 초성
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Leading {
    Giyeok,
    SsangGiyeok,
    Nieun,
    Digeut,
    SsangDigeut,
    Rieul,
    Mieum,
    Bieup,
    SsangBieup,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    SsangJieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
}

impl Leading {
    /// 유니코드 순서대로 나열한 전체 초성
    pub const ALL: [Leading; 19] = [
        Leading::Giyeok,
        Leading::SsangGiyeok,
        Leading::Nieun,
        Leading::Digeut,
        Leading::SsangDigeut,
        Leading::Rieul,
        Leading::Mieum,
        Leading::Bieup,
        Leading::SsangBieup,
        Leading::Siot,
        Leading::SsangSiot,
        Leading::Ieung,
        Leading::Jieut,
        Leading::SsangJieut,
        Leading::Chieut,
        Leading::Kieuk,
        Leading::Tieut,
        Leading::Pieup,
        Leading::Hieut,
    ];

    /// 초성 인덱스 (0~18)
    pub fn index(self) -> usize {
        self as usize
    }

    /// 초성 인덱스로부터 생성 (범위 밖이면 None)
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// 호환용 자모 문자
    pub fn jamo(self) -> char {
        #[rustfmt::skip]
        const JAMO: [char; 19] = [
            'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
            'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
        ];
        JAMO[self.index()]
    }
}

/// 중성
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vowel {
    A,
    Ae,
    Ya,
    Yae,
    Eo,
    E,
    Yeo,
    Ye,
    O,
    Wa,
    Wae,
    Oe,
    Yo,
    U,
    Wo,
    We,
    Wi,
    Yu,
    Eu,
    Ui,
    I,
}

impl Vowel {
    pub const ALL: [Vowel; 21] = [
        Vowel::A,
        Vowel::Ae,
        Vowel::Ya,
        Vowel::Yae,
        Vowel::Eo,
        Vowel::E,
        Vowel::Yeo,
        Vowel::Ye,
        Vowel::O,
        Vowel::Wa,
        Vowel::Wae,
        Vowel::Oe,
        Vowel::Yo,
        Vowel::U,
        Vowel::Wo,
        Vowel::We,
        Vowel::Wi,
        Vowel::Yu,
        Vowel::Eu,
        Vowel::Ui,
        Vowel::I,
    ];

    /// 중성 인덱스 (0~20)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// 호환용 모음 자모: ㅏ(0x314F) ~ ㅣ(0x3163) 연속 구간
    pub fn jamo(self) -> char {
        char::from_u32(0x314F + self.index() as u32).unwrap_or('\u{FFFD}')
    }
}

/// 종성 (종성 없음은 `Option<Trailing>::None`으로 표현)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Trailing {
    Giyeok,
    SsangGiyeok,
    GiyeokSiot,
    Nieun,
    NieunJieut,
    NieunHieut,
    Digeut,
    Rieul,
    RieulGiyeok,
    RieulMieum,
    RieulBieup,
    RieulSiot,
    RieulTieut,
    RieulPieup,
    RieulHieut,
    Mieum,
    Bieup,
    BieupSiot,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
}

impl Trailing {
    pub const ALL: [Trailing; 27] = [
        Trailing::Giyeok,
        Trailing::SsangGiyeok,
        Trailing::GiyeokSiot,
        Trailing::Nieun,
        Trailing::NieunJieut,
        Trailing::NieunHieut,
        Trailing::Digeut,
        Trailing::Rieul,
        Trailing::RieulGiyeok,
        Trailing::RieulMieum,
        Trailing::RieulBieup,
        Trailing::RieulSiot,
        Trailing::RieulTieut,
        Trailing::RieulPieup,
        Trailing::RieulHieut,
        Trailing::Mieum,
        Trailing::Bieup,
        Trailing::BieupSiot,
        Trailing::Siot,
        Trailing::SsangSiot,
        Trailing::Ieung,
        Trailing::Jieut,
        Trailing::Chieut,
        Trailing::Kieuk,
        Trailing::Tieut,
        Trailing::Pieup,
        Trailing::Hieut,
    ];

    /// 종성 인덱스 (0~26)
    ///
    /// 음절 코드의 종성 슬롯(1~27)보다 1 작습니다. 슬롯 0은 종성 없음입니다.
    pub fn index(self) -> usize {
        self as usize
    }

    /// 음절 코드의 종성 슬롯(0~27)에서 생성. 0이면 종성 없음.
    pub fn from_slot(slot: u32) -> Option<Self> {
        slot.checked_sub(1).and_then(Self::from_index)
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// 음절 코드의 종성 슬롯 (1~27)
    pub fn slot(self) -> u32 {
        self.index() as u32 + 1
    }

    pub fn jamo(self) -> char {
        #[rustfmt::skip]
        const JAMO: [char; 27] = [
            'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
            'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
            'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
        ];
        JAMO[self.index()]
    }
}
