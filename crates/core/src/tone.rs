//! Vietnamese tone-mark removal.
//!
//! Every precomposed Vietnamese vowel (with circumflex, breve or horn, and any of
//! the five marked tones) maps to its plain Latin base letter, case preserved.
//! `đ`/`Đ` have no canonical decomposition and are listed explicitly.

use std::collections::HashMap;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Precomposed Vietnamese letter to base letter, both cases.
pub const VIETNAMESE_TONE_TABLE: [(char, char); 134] = [
    ('à', 'a'), ('á', 'a'), ('ả', 'a'), ('ã', 'a'), ('ạ', 'a'), ('ă', 'a'),
    ('ằ', 'a'), ('ắ', 'a'), ('ẳ', 'a'), ('ẵ', 'a'), ('ặ', 'a'), ('â', 'a'),
    ('ầ', 'a'), ('ấ', 'a'), ('ẩ', 'a'), ('ẫ', 'a'), ('ậ', 'a'),
    ('è', 'e'), ('é', 'e'), ('ẻ', 'e'), ('ẽ', 'e'), ('ẹ', 'e'), ('ê', 'e'),
    ('ề', 'e'), ('ế', 'e'), ('ể', 'e'), ('ễ', 'e'), ('ệ', 'e'),
    ('ì', 'i'), ('í', 'i'), ('ỉ', 'i'), ('ĩ', 'i'), ('ị', 'i'),
    ('ò', 'o'), ('ó', 'o'), ('ỏ', 'o'), ('õ', 'o'), ('ọ', 'o'), ('ô', 'o'),
    ('ồ', 'o'), ('ố', 'o'), ('ổ', 'o'), ('ỗ', 'o'), ('ộ', 'o'), ('ơ', 'o'),
    ('ờ', 'o'), ('ớ', 'o'), ('ở', 'o'), ('ỡ', 'o'), ('ợ', 'o'),
    ('ù', 'u'), ('ú', 'u'), ('ủ', 'u'), ('ũ', 'u'), ('ụ', 'u'), ('ư', 'u'),
    ('ừ', 'u'), ('ứ', 'u'), ('ử', 'u'), ('ữ', 'u'), ('ự', 'u'),
    ('ỳ', 'y'), ('ý', 'y'), ('ỷ', 'y'), ('ỹ', 'y'), ('ỵ', 'y'),
    ('đ', 'd'),
    ('À', 'A'), ('Á', 'A'), ('Ả', 'A'), ('Ã', 'A'), ('Ạ', 'A'), ('Ă', 'A'),
    ('Ằ', 'A'), ('Ắ', 'A'), ('Ẳ', 'A'), ('Ẵ', 'A'), ('Ặ', 'A'), ('Â', 'A'),
    ('Ầ', 'A'), ('Ấ', 'A'), ('Ẩ', 'A'), ('Ẫ', 'A'), ('Ậ', 'A'),
    ('È', 'E'), ('É', 'E'), ('Ẻ', 'E'), ('Ẽ', 'E'), ('Ẹ', 'E'), ('Ê', 'E'),
    ('Ề', 'E'), ('Ế', 'E'), ('Ể', 'E'), ('Ễ', 'E'), ('Ệ', 'E'),
    ('Ì', 'I'), ('Í', 'I'), ('Ỉ', 'I'), ('Ĩ', 'I'), ('Ị', 'I'),
    ('Ò', 'O'), ('Ó', 'O'), ('Ỏ', 'O'), ('Õ', 'O'), ('Ọ', 'O'), ('Ô', 'O'),
    ('Ồ', 'O'), ('Ố', 'O'), ('Ổ', 'O'), ('Ỗ', 'O'), ('Ộ', 'O'), ('Ơ', 'O'),
    ('Ờ', 'O'), ('Ớ', 'O'), ('Ở', 'O'), ('Ỡ', 'O'), ('Ợ', 'O'),
    ('Ù', 'U'), ('Ú', 'U'), ('Ủ', 'U'), ('Ũ', 'U'), ('Ụ', 'U'), ('Ư', 'U'),
    ('Ừ', 'U'), ('Ứ', 'U'), ('Ử', 'U'), ('Ữ', 'U'), ('Ự', 'U'),
    ('Ỳ', 'Y'), ('Ý', 'Y'), ('Ỷ', 'Y'), ('Ỹ', 'Y'), ('Ỵ', 'Y'),
    ('Đ', 'D'),
];

fn tone_map() -> &'static HashMap<char, char> {
    static MAP: OnceLock<HashMap<char, char>> = OnceLock::new();
    MAP.get_or_init(|| VIETNAMESE_TONE_TABLE.iter().copied().collect())
}

/// Base letter for a Vietnamese letter, or the character itself.
#[must_use]
pub fn strip_char(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    tone_map().get(&c).copied().unwrap_or(c)
}

/// Replace every Vietnamese-modified letter with its base letter.
///
/// Case is preserved and all other characters pass through untouched, so the
/// function is the identity on ASCII input.
#[must_use]
pub fn remove_tone_marks(text: &str) -> String {
    text.chars().map(strip_char).collect()
}

/// Trim, strip tone marks and lower-case a name.
///
/// Input is NFC-composed first so that names typed with combining marks
/// (common in files exported on macOS) hit the precomposed table.
#[must_use]
pub fn normalize(text: &str) -> String {
    let composed: String = text.trim().nfc().collect();
    remove_tone_marks(&composed).to_lowercase()
}
