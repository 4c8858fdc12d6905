//! 한글 -> 로마자 통합 변환기

use crate::core::phoneme::{romanize_parts, SyllableParts};
use crate::core::unicode::{decompose, Syllable};

/// 변환 결과의 한 글자 단위 설명
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// 로마자로 바뀐 한글 음절
    Romanized { source: char, parts: SyllableParts },
    /// 그대로 통과한 문자
    Passthrough(char),
}

impl Segment {
    /// 원래 문자
    pub fn source(&self) -> char {
        match *self {
            Segment::Romanized { source, .. } => source,
            Segment::Passthrough(c) => c,
        }
    }

    /// 출력 문자열
    pub fn output(&self) -> String {
        match self {
            Segment::Romanized { parts, .. } => parts.to_latin(),
            Segment::Passthrough(c) => c.to_string(),
        }
    }
}

/// (앞, 현재, 뒤) 세 글자 창을 한 칸씩 밀면서 콜백 호출
///
/// 각 문자는 한 번만 분해됩니다. 처음과 끝에서는 앞/뒤 글자가 None입니다.
fn for_each_window<I, F>(chars: I, mut f: F)
where
    I: IntoIterator<Item = char>,
    F: FnMut(&Syllable, Option<&Syllable>, Option<&Syllable>),
{
    let mut syllables = chars.into_iter().map(decompose).peekable();
    let mut previous: Option<Syllable> = None;

    while let Some(current) = syllables.next() {
        let next = syllables.peek().copied();
        f(&current, previous.as_ref(), next.as_ref());
        previous = Some(current);
    }
}

fn romanize_chars<I: IntoIterator<Item = char>>(chars: I, capacity: usize) -> String {
    let mut output = String::with_capacity(capacity);
    for_each_window(chars, |current, previous, next| {
        match romanize_parts(current, previous, next) {
            Some(parts) => output.push_str(&parts.to_latin()),
            None => output.push(current.codepoint()),
        }
    });
    output
}

/// 한글 문자열을 로마자로 변환
/// 완성형 한글이 아닌 문자(영문, 숫자, 특수문자, 낱자모 등)는 그대로 유지
pub fn romanize(input: &str) -> String {
    romanize_chars(input.chars(), input.len())
}

/// UTF-16 코드 유닛 열을 로마자로 변환
///
/// 짝이 없는 서로게이트는 U+FFFD로 바꿔 통과시킵니다.
pub fn romanize_utf16(input: &[u16]) -> String {
    let chars = char::decode_utf16(input.iter().copied())
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER));
    romanize_chars(chars, input.len())
}

/// 글자별 변환 내역
pub fn explain(input: &str) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(input.chars().count());
    for_each_window(input.chars(), |current, previous, next| {
        let segment = match romanize_parts(current, previous, next) {
            Some(parts) => Segment::Romanized {
                source: current.codepoint(),
                parts,
            },
            None => Segment::Passthrough(current.codepoint()),
        };
        segments.push(segment);
    });
    segments
}
