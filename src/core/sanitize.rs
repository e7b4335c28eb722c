// src/core/sanitize.rs
use scraper::Html;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical form for comparing team labels.
///
/// Decodes HTML entities, strips diacritics (NFKD, then drop combining
/// marks), case-folds and collapses whitespace.
/// `"TSV  Grombühl&nbsp;2"` and `"tsv grombuhl 2"` compare equal.
///
/// Idempotent: decomposition can surface new spaces (`´` is a space plus an
/// accent) and lowercasing can surface new marks (`İ`), so the fold is
/// repeated until the text stops changing.
pub fn normalize(s: &str) -> String {
    let mut cur = fold(s);
    for _ in 0..MAX_FOLD_PASSES {
        let next = fold(&cur);
        if next == cur {
            break;
        }
        cur = next;
    }
    cur
}

const MAX_FOLD_PASSES: usize = 8;

fn fold(s: &str) -> String {
    let decoded = decode_entities_fully(s);
    let folded = casefold(&strip_marks(&decoded));
    normalize_ws(&strip_marks(&folded))
}

fn strip_marks(s: &str) -> String {
    s.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// `&amp;amp;` style double escapes come out fully decoded.
fn decode_entities_fully(s: &str) -> String {
    let mut cur = decode_entities(s);
    while cur.contains('&') {
        let next = decode_entities(&cur);
        if next == cur {
            break;
        }
        cur = next;
    }
    cur
}

/// Lowercase plus the full-folding special cases lowercase misses.
pub fn casefold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            'ß' | 'ẞ' => out.push_str("ss"),
            _ => out.extend(ch.to_lowercase()),
        }
    }
    out
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Decode numeric and named character references with the HTML5 parser,
/// so the full named set (including legacy forms without `;`, like `&uuml`)
/// is covered. Anything that is not a reference is kept verbatim.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    // keep markup-looking text literal; only references get decoded
    let escaped = s.replace('<', "&lt;");
    Html::parse_fragment(&escaped).root_element().text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diaeresis_and_folds_case() {
        assert_eq!(normalize("Grombühl"), "grombuhl");
        assert_eq!(normalize("TSV GROMBÜHL 2"), "tsv grombuhl 2");
        // transliteration is not attempted
        assert_ne!(normalize("Grombühl"), normalize("Grombuehl"));
    }

    #[test]
    fn collapses_whitespace_and_entities() {
        assert_eq!(normalize("  TG\t\n Veitsh&ouml;chheim&nbsp; "), "tg veitshochheim");
        assert_eq!(normalize("A &amp; B"), "a & b");
        assert_eq!(normalize("Grombu&#776;hl"), "grombuhl");
    }

    #[test]
    fn folds_sharp_s() {
        assert_eq!(normalize("Straße"), "strasse");
        assert_eq!(normalize("STRASSE"), "strasse");
    }

    #[test]
    fn idempotent_on_labels() {
        for s in [
            "TSV Grombühl 2", "  TG 1877 Veitshöchheim ", "Baskets Würzburg", "Ærø BC", "", "ﬁnal ①",
            "x´", "a¨ b", "TSV ´ Grombühl", "&amp;amp;", "&amp;uuml;", "İstanbul", "ℌalle", "＆amp;",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {s:?}");
        }
    }

    #[test]
    fn spacing_accents_do_not_leave_spaces() {
        assert_eq!(normalize("x´"), "x");
        assert_eq!(normalize("a¨ b"), "a b");
        assert_eq!(normalize("TSV ´ Grombühl"), "tsv grombuhl");
    }

    #[test]
    fn double_escaped_entities_decode_fully() {
        assert_eq!(normalize("&amp;amp;"), "&");
        assert_eq!(normalize("Gromb&amp;uuml;hl"), "grombuhl");
    }

    #[test]
    fn full_named_entity_set() {
        assert_eq!(decode_entities("&Eacute;lan &oslash;"), "Élan ø");
        assert_eq!(decode_entities("Gromb&uumlhl"), "Grombühl");
        assert_eq!(normalize("&Eacute;LAN"), "elan");
        assert_eq!(decode_entities("a<b> c"), "a<b> c");
    }

    #[test]
    fn unknown_entities_kept() {
        assert_eq!(decode_entities("a &bogus; b & c"), "a &bogus; b & c");
        assert_eq!(decode_entities("&#x4D;&#77;"), "MM");
        assert_eq!(decode_entities("trailing &"), "trailing &");
    }
}
