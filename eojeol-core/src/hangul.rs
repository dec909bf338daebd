//! Hangul syllable decomposition
//!
//! A precomposed syllable in U+AC00..=U+D7A3 encodes
//! `((initial * 21) + medial) * 28 + final`.

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const MEDIAL_COUNT: u32 = 21;
const FINAL_COUNT: u32 = 28;

const INITIALS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

const MEDIALS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

// Index 0 means "no final consonant"
const FINALS: [char; 28] = [
    ' ', 'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Jamo of one precomposed syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    /// Initial consonant (choseong)
    pub initial: char,
    /// Vowel (jungseong)
    pub medial: char,
    /// Final consonant (jongseong), if any
    pub coda: Option<char>,
}

/// Whether `ch` is a precomposed Hangul syllable
#[inline]
pub fn is_syllable(ch: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(ch as u32))
}

/// Whether `ch` is a compatibility consonant jamo such as 'ㅎ'
#[inline]
pub fn is_consonant_jamo(ch: char) -> bool {
    ('ㄱ'..='ㅎ').contains(&ch)
}

/// Decompose a precomposed syllable into its jamo
pub fn decompose(ch: char) -> Option<Syllable> {
    if !is_syllable(ch) {
        return None;
    }

    let code = ch as u32 - SYLLABLE_BASE;
    let initial = code / (MEDIAL_COUNT * FINAL_COUNT);
    let medial = (code % (MEDIAL_COUNT * FINAL_COUNT)) / FINAL_COUNT;
    let coda = code % FINAL_COUNT;

    Some(Syllable {
        initial: INITIALS[initial as usize],
        medial: MEDIALS[medial as usize],
        coda: (coda > 0).then(|| FINALS[coda as usize]),
    })
}

/// Initial consonant of a syllable, or the consonant itself for a bare jamo
pub fn initial_consonant(ch: char) -> Option<char> {
    if is_consonant_jamo(ch) {
        return Some(ch);
    }
    decompose(ch).map(|syllable| syllable.initial)
}
