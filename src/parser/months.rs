//! Turkish month-token normalization.

/// Turkish letters folded to their ASCII lookalikes. Fixed substitutions
/// only, no general Unicode normalization.
const FOLD_TABLE: &[(char, char)] = &[
    ('ğ', 'g'),
    ('Ğ', 'G'),
    ('ı', 'i'),
    ('İ', 'I'),
    ('â', 'a'),
    ('Â', 'A'),
];

/// Month names and abbreviations, with and without diacritics.
const MONTH_TABLE: &[(&str, u32)] = &[
    ("Ocak", 1),
    ("Şubat", 2),
    ("Subat", 2),
    ("Mart", 3),
    ("Nisan", 4),
    ("Mayıs", 5),
    ("Mayis", 5),
    ("Haziran", 6),
    ("Temmuz", 7),
    ("Ağustos", 8),
    ("Agustos", 8),
    ("Eylül", 9),
    ("Eylul", 9),
    ("Ekim", 10),
    ("Kasım", 11),
    ("Kasim", 11),
    ("Aralık", 12),
    ("Aralik", 12),
    ("Oca", 1),
    ("Şub", 2),
    ("Sub", 2),
    ("Mar", 3),
    ("Nis", 4),
    ("May", 5),
    ("Haz", 6),
    ("Tem", 7),
    ("Ağu", 8),
    ("Agu", 8),
    ("Eyl", 9),
    ("Eki", 10),
    ("Kas", 11),
    ("Ara", 12),
];

/// Canonical names for rendering dates back into Turkish.
const MONTH_NAMES: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran",
    "Temmuz", "Ağustos", "Eylül", "Ekim", "Kasım", "Aralık",
];

/// Map a raw month token to its month number.
///
/// With a non-empty `allowed` set the token is rejected unless the raw or
/// diacritic-folded form and one of the allowed names contain each other as
/// literal substrings, in either direction — so the abbreviation "Kas"
/// passes a "Kasım" whitelist. Case-sensitive, not word-boundary aware.
/// Lookup tries the raw token, the folded token, then the first three
/// characters of the raw token; the prefix fallback intentionally resolves
/// any word sharing a known abbreviation's prefix.
pub fn normalize(token: &str, allowed: &[String]) -> Option<u32> {
    let folded = fold_diacritics(token);
    if !allowed.is_empty() && !allowed.iter().any(|name| allows(name, token, &folded)) {
        return None;
    }
    let prefix: String = token.chars().take(3).collect();
    lookup(token)
        .or_else(|| lookup(&folded))
        .or_else(|| lookup(&prefix))
}

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

fn allows(name: &str, token: &str, folded: &str) -> bool {
    token.contains(name)
        || folded.contains(name)
        || name.contains(token)
        || name.contains(folded)
}

fn fold_diacritics(s: &str) -> String {
    s.chars()
        .map(|c| {
            FOLD_TABLE
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}

fn lookup(key: &str) -> Option<u32> {
    MONTH_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, month)| *month)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize_unfiltered(token: &str) -> Option<u32> {
        normalize(token, &[])
    }

    #[test]
    fn full_names() {
        assert_eq!(normalize_unfiltered("Ocak"), Some(1));
        assert_eq!(normalize_unfiltered("Kasım"), Some(11));
        assert_eq!(normalize_unfiltered("Aralık"), Some(12));
    }

    #[test]
    fn ascii_variants() {
        assert_eq!(normalize_unfiltered("Kasim"), Some(11));
        assert_eq!(normalize_unfiltered("Agustos"), Some(8));
    }

    #[test]
    fn abbreviations() {
        assert_eq!(normalize_unfiltered("Kas"), Some(11));
        assert_eq!(normalize_unfiltered("Şub"), Some(2));
        assert_eq!(normalize_unfiltered("Eki"), Some(10));
    }

    #[test]
    fn folded_lookup() {
        // Not in the table as written; Â folds to A and the folded form is.
        assert_eq!(normalize_unfiltered("Âra"), Some(12));
    }

    #[test]
    fn prefix_fallback() {
        // First three characters match the "Kas" abbreviation even though
        // the whole word is not a month.
        assert_eq!(normalize_unfiltered("Kasımpaşa"), Some(11));
        assert_eq!(normalize_unfiltered("Marangoz"), Some(3));
    }

    #[test]
    fn unrecognized() {
        assert_eq!(normalize_unfiltered("Perşembe"), None);
        assert_eq!(normalize_unfiltered(""), None);
    }

    #[test]
    fn allowed_filter_rejects_other_months() {
        let allowed = vec!["Kasım".to_string()];
        assert_eq!(normalize("Kasım", &allowed), Some(11));
        assert_eq!(normalize("Aralık", &allowed), None);
        assert_eq!(normalize("Mart", &allowed), None);
        assert_eq!(normalize("Ara", &allowed), None);
    }

    #[test]
    fn allowed_filter_accepts_abbreviation_of_allowed_name() {
        let allowed = vec!["Kasım".to_string()];
        assert_eq!(normalize("Kas", &allowed), Some(11));
    }

    #[test]
    fn allowed_filter_matches_folded_form() {
        // Raw token "Kasim" does not contain "Kasım", but the filter also
        // accepts names matching against the folded token.
        let allowed = vec!["Kasim".to_string()];
        assert_eq!(normalize("Kasım", &allowed), Some(11));
    }

    #[test]
    fn empty_allowed_set_disables_filter() {
        assert_eq!(normalize("Temmuz", &[]), Some(7));
    }

    #[test]
    fn month_names_round_trip() {
        assert_eq!(month_name(11), "Kasım");
        assert_eq!(month_name(1), "Ocak");
        assert_eq!(month_name(12), "Aralık");
    }
}
