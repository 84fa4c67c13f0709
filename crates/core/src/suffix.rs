/// Naming-convention suffix of a type name.
///
/// The suffix runs from the rightmost ASCII uppercase letter to the end, so
/// `org.pkg.io.support.ResourcePatternResolver` yields `Resolver`. Package
/// segments are normally lowercase and never need to be split off.
///
/// A name without any uppercase letter is returned unchanged and a warning is
/// logged. The filter removes such names before classification, but the
/// function stays total for callers that skip it.
#[must_use]
pub fn suffix(name: &str) -> &str {
    // ASCII bytes never occur inside a multi-byte UTF-8 sequence, so the
    // byte index is always a char boundary.
    match name.bytes().rposition(|b| b.is_ascii_uppercase()) {
        Some(start) => &name[start..],
        None => {
            log::warn!("type name has no uppercase letter: {name:?}");
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name_is_its_own_suffix() {
        assert_eq!(suffix("org.pkg.io.Resource"), "Resource");
    }

    #[test]
    fn last_capitalised_word_wins() {
        assert_eq!(
            suffix("org.pkg.io.support.ResourcePatternResolver"),
            "Resolver"
        );
    }

    #[test]
    fn single_letter_name() {
        assert_eq!(suffix("org.pkg.X"), "X");
    }

    #[test]
    fn trailing_acronym_keeps_only_last_letter() {
        assert_eq!(suffix("org.pkg.HttpURL"), "L");
    }

    #[test]
    fn digits_and_underscores_stay_with_the_suffix() {
        assert_eq!(suffix("org.pkg.Base64_v2"), "Base64_v2");
    }

    #[test]
    fn no_uppercase_falls_back_to_input() {
        assert_eq!(suffix("org.pkg.lowercase"), "org.pkg.lowercase");
        assert_eq!(suffix(""), "");
    }

    #[test]
    fn multibyte_prefix_is_handled() {
        assert_eq!(suffix("org.パッケージ.DataReader"), "Reader");
    }

    #[test]
    fn idempotent_on_examples() {
        for name in ["a.b.ResourceResolver", "X", "a.Foo_bar", "q.AbcDef9"] {
            let once = suffix(name);
            assert_eq!(suffix(once), once);
        }
    }
}
