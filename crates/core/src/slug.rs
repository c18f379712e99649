//! URL slug generation for blog posts and other titled records.
//!
//! Titles arrive in Portuguese, so the generator folds the common Latin-1
//! diacritics to plain ASCII before mapping everything else to hyphens.

/// Fold a single character to its ASCII base letter, if it has one.
fn fold_diacritic(c: char) -> Option<char> {
    let folded = match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => return None,
    };
    Some(folded)
}

/// Generate a URL-safe slug from a title.
///
/// Lowercases, folds Portuguese diacritics to ASCII, replaces every other
/// non-alphanumeric character with a hyphen, collapses consecutive hyphens,
/// and trims leading/trailing hyphens.
pub fn generate_slug(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c
            } else {
                fold_diacritic(c).unwrap_or('-')
            }
        })
        .collect();

    // Collapse consecutive hyphens.
    let mut result = String::with_capacity(slug.len());
    let mut prev_hyphen = false;
    for c in slug.chars() {
        if c == '-' {
            if !prev_hyphen {
                result.push('-');
            }
            prev_hyphen = true;
        } else {
            result.push(c);
            prev_hyphen = false;
        }
    }

    result.trim_matches('-').to_string()
}

/// Resolve the slug for a new record: an explicit non-empty slug is kept
/// verbatim (trimmed), otherwise one is generated from the title.
pub fn slug_or_generate(explicit: Option<&str>, title: &str) -> String {
    match explicit.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => generate_slug(title),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_title() {
        assert_eq!(generate_slug("Hello World"), "hello-world");
    }

    #[test]
    fn punctuation_and_dashes_collapse() {
        assert_eq!(generate_slug("Missa de Natal — 2024!"), "missa-de-natal-2024");
    }

    #[test]
    fn portuguese_diacritics_fold_to_ascii() {
        assert_eq!(generate_slug("Festa de São João"), "festa-de-sao-joao");
        assert_eq!(generate_slug("Oração e Comunhão"), "oracao-e-comunhao");
    }

    #[test]
    fn leading_and_trailing_separators_trim() {
        assert_eq!(generate_slug("  ...Aviso...  "), "aviso");
    }

    #[test]
    fn numbers_survive() {
        assert_eq!(generate_slug("Novena 2025, dia 3"), "novena-2025-dia-3");
    }

    #[test]
    fn explicit_slug_is_never_overwritten() {
        assert_eq!(
            slug_or_generate(Some("minha-pagina"), "Um Título Qualquer"),
            "minha-pagina"
        );
    }

    #[test]
    fn empty_explicit_slug_falls_back_to_title() {
        assert_eq!(slug_or_generate(Some("   "), "Um Título"), "um-titulo");
        assert_eq!(slug_or_generate(None, "Um Título"), "um-titulo");
    }
}
