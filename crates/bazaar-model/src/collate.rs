//! Locale-aware text comparison for table sorting.
//!
//! Catalog data (product names, brands, subjects) is predominantly Persian,
//! and codepoint order gets the alphabet wrong: `پ` would sort after `ی`,
//! `ک`/`ك` and `ی`/`ي` variants would split. This module carries a small
//! data-driven collation: characters map to (class, rank) keys (punctuation,
//! then digits, then Latin, then the Persian alphabet in dictionary order)
//! and strings compare by key sequence.

use std::cmp::Ordering;

/// The Persian alphabet in dictionary order. Arabic-presentation variants
/// are folded onto their Persian counterparts before lookup.
const PERSIAN_ALPHABET: [char; 33] = [
    'آ', 'ا', 'ب', 'پ', 'ت', 'ث', 'ج', 'چ', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'ژ', 'س', 'ش', 'ص',
    'ض', 'ط', 'ظ', 'ع', 'غ', 'ف', 'ق', 'ک', 'گ', 'ل', 'م', 'ن', 'و', 'ه', 'ی',
];

/// Fold Arabic variant letters onto the Persian forms they read as.
fn fold(c: char) -> char {
    match c {
        'ي' | 'ى' => 'ی',
        'ك' => 'ک',
        'أ' | 'إ' => 'ا',
        'ة' => 'ه',
        _ => c,
    }
}

/// Collation key for one character: class first, rank within class second.
fn key(c: char) -> (u8, u32) {
    let c = fold(c);
    if let Some(rank) = PERSIAN_ALPHABET.iter().position(|&p| p == c) {
        return (3, rank as u32);
    }
    if c.is_ascii_digit() {
        return (1, c as u32);
    }
    if c.is_ascii_alphabetic() {
        return (2, c.to_ascii_lowercase() as u32);
    }
    if c.is_alphabetic() {
        // Non-Persian, non-Latin scripts sort after Persian by codepoint.
        return (4, c as u32);
    }
    (0, c as u32)
}

/// Compare two strings with Persian-aware collation.
///
/// Total and deterministic: key-equal strings fall back to codepoint order
/// so sorting never sees an ambiguous tie between distinct values.
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut lhs = a.chars();
    let mut rhs = b.chars();
    loop {
        match (lhs.next(), rhs.next()) {
            (Some(x), Some(y)) => match key(x).cmp(&key(y)) {
                Ordering::Equal => continue,
                other => return other,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return a.cmp(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persian_dictionary_order() {
        // پرتقال (orange) before سیب (apple) before موز (banana)
        assert_eq!(compare("پرتقال", "سیب"), Ordering::Less);
        assert_eq!(compare("سیب", "موز"), Ordering::Less);
        // Codepoint order would invert this one: 'پ' (U+067E) > 'ب' (U+0628)
        // but comes right after it in the alphabet.
        assert_eq!(compare("باران", "پنیر"), Ordering::Less);
    }

    #[test]
    fn arabic_variants_fold() {
        // Folded forms compare adjacent, not in separate script blocks.
        assert_eq!(key('ي'), key('ی'));
        assert_eq!(key('ك'), key('ک'));
        // Distinct strings stay distinct via the codepoint tie-break.
        assert_ne!(compare("علي", "علی"), Ordering::Equal);
    }

    #[test]
    fn latin_before_persian() {
        assert_eq!(compare("apple", "سیب"), Ordering::Less);
        assert_eq!(compare("Zoo", "apple"), Ordering::Greater);
    }

    #[test]
    fn latin_case_insensitive_primary() {
        assert_eq!(compare("Apple", "apricot"), Ordering::Less);
    }
}
