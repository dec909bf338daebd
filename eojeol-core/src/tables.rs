//! Literal lexical tables used by the hard-rule filters

/// Particles added regardless of the suffix score table
pub(crate) const DEFAULT_PARTICLES: &[&str] = &["는"];

/// Extension prefixes (first two characters) that confirm a noun use
pub(crate) const PASS_SET: &[&str] = &[
    "과", "는", "되고", "되는", "되다", "된다", "들", "들에", "들의", "들이", "로", "로는", "로도",
    "로서", "를", "부터", "뿐", "뿐만", "뿐이", "뿐인", "에게", "에도", "에서", "에와", "와",
    "으로", "으로의", "은", "의", "이", "이나", "이라", "이었", "인", "임", "처럼", "하다", "한",
    "할", "했던", "했고", "했다",
];

/// Trailing bigrams that never end a noun
pub(crate) const STOP_BIGRAMS: &[&str] = &["갔다", "이는", "겠지", "보는"];

/// A trailing character followed mostly by these particles is a particle fragment
pub(crate) const TRAILING_FRAGMENT_RULES: &[(char, &[&str])] = &[
    ('으', &["로", "로써", "로만", "로의"]),
    ('지', &["만"]),
    ('없', &["는", "이", "다", "었다"]),
];

/// Trailing characters that must keep the frequency of the shorter prefix
pub(crate) const RETENTION_CHARS: &[char] = &['인', '은', '의', '와', '과'];

/// Trailing bigrams that must keep the frequency of the shorter prefix
pub(crate) const RETENTION_BIGRAMS: &[&str] = &["들이", "들은", "들도", "들을"];

/// Locative/instrumental ending rejected after a short or known head
pub(crate) const LOCATIVE_SUFFIX: &str = "으로";

/// Final syllable of passive verbalizations such as 폭행당(하다)
pub(crate) const PASSIVE_SYLLABLE: char = '당';

/// Initial consonant of 하다-family endings
pub(crate) const VERBALIZER_INITIAL: char = 'ㅎ';

/// Whether the first two characters of an extension are in the pass set
pub(crate) fn in_pass_set(extension: &str) -> bool {
    let head = crate::text::prefix(extension, 2);
    PASS_SET.contains(&head)
}
