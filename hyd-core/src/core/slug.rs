//! Date-prefixed filenames derived from note titles, and the reverse mapping.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Extension carried by every exported document.
pub const MARKDOWN_EXT: &str = ".md";

static LEADING_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}-").expect("static regex is valid")
});

/// Converts a title into a filename-safe slug.
///
/// The title is trimmed and lowercased, spaces become `-`, and every
/// character outside `[a-z0-9-]` is dropped. Runs of hyphens are kept as-is.
pub fn slugify(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Returns the `yyyy-mm-dd` prefix of `title` if it starts with one.
///
/// Only the segment lengths (4, 2, 2) and their digits are checked; the
/// date is not validated against the calendar.
pub fn date_prefix(title: &str) -> Option<&str> {
    let mut parts = title.splitn(4, '-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    let is_digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    if is_digits(year, 4) && is_digits(month, 2) && is_digits(day, 2) {
        Some(&title[..10])
    } else {
        None
    }
}

/// Builds `"<yyyy-mm-dd>-<slug>.md"` for a title.
///
/// A title that already starts with a `yyyy-mm-dd-` prefix (for example one
/// recovered from a previously saved filename) keeps that date instead of
/// `date`; only the remainder is slugified.
pub fn derive_filename(title: &str, date: NaiveDate) -> String {
    let base = stem(title);
    match date_prefix(base) {
        Some(prefix) => {
            let rest = base[prefix.len()..].trim_start_matches('-');
            format!("{prefix}-{}{MARKDOWN_EXT}", slugify(rest))
        }
        None => format!("{}-{}{MARKDOWN_EXT}", date.format("%Y-%m-%d"), slugify(base)),
    }
}

/// The calendar date named by a title's `yyyy-mm-dd-` prefix, read the same
/// way [`derive_filename`] reads it. `None` when there is no prefix or it is
/// not a real date.
pub fn prefixed_date(title: &str) -> Option<NaiveDate> {
    date_prefix(stem(title)).and_then(|p| NaiveDate::parse_from_str(p, "%Y-%m-%d").ok())
}

fn stem(title: &str) -> &str {
    let base = title.trim();
    base.strip_suffix(MARKDOWN_EXT).unwrap_or(base)
}

/// Recovers a human title from a derived filename.
///
/// Drops the `.md` extension and a leading `yyyy-mm-dd-`, then turns the
/// remaining hyphens into spaces. Case and stripped punctuation are not
/// recoverable.
pub fn title_from_filename(filename: &str) -> String {
    let base = filename.strip_suffix(MARKDOWN_EXT).unwrap_or(filename);
    LEADING_DATE.replace(base, "").replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may_10() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 10).unwrap()
    }

    fn matches_filename_shape(name: &str) -> bool {
        Regex::new(r"^\d{4}-\d{2}-\d{2}-[a-z0-9-]*\.md$").unwrap().is_match(name)
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My First Post"), "my-first-post");
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  padded  "), "padded");
        assert_eq!(slugify("a  b"), "a--b");
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_derive_filename_uses_given_date() {
        assert_eq!(derive_filename("My First Post", may_10()), "2025-05-10-my-first-post.md");
    }

    #[test]
    fn test_derive_filename_reuses_existing_prefix() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(
            derive_filename("2025-05-10-my-first-post", today),
            "2025-05-10-my-first-post.md"
        );
        assert_eq!(
            derive_filename("2025-05-10-my-first-post.md", today),
            "2025-05-10-my-first-post.md"
        );
        assert_eq!(derive_filename("2025-05-10-Re Saved", today), "2025-05-10-re-saved.md");
    }

    #[test]
    fn test_prefix_check_is_digits_and_length_only() {
        assert_eq!(date_prefix("2025-13-99-x"), Some("2025-13-99"));
        assert_eq!(date_prefix("2025-05-10"), Some("2025-05-10"));
        assert_eq!(date_prefix("25-05-10-x"), None);
        assert_eq!(date_prefix("2025-5-10-x"), None);
        assert_eq!(date_prefix("abcd-ef-gh-x"), None);
        assert_eq!(date_prefix("my-first-post"), None);
    }

    #[test]
    fn test_prefixed_date_matches_filename_prefix() {
        let expected = NaiveDate::from_ymd_opt(2025, 5, 10);
        assert_eq!(prefixed_date("2025-05-10.md"), expected);
        assert_eq!(prefixed_date(" 2025-05-10-post "), expected);
        assert_eq!(prefixed_date("2025-13-99-x"), None);
        assert_eq!(prefixed_date("post"), None);
    }

    #[test]
    fn test_bare_date_title_gives_empty_slug() {
        assert_eq!(derive_filename("2025-05-10", may_10()), "2025-05-10-.md");
    }

    #[test]
    fn test_derived_filenames_have_expected_shape() {
        let titles = [
            "My First Post",
            "",
            "   ",
            "!!!",
            "Ünïcödé títle",
            "2025-05-10-Already Dated!",
            "2025-05-10",
            "a/b\\c.md",
            "tabs\tand\nnewlines",
            "2025-05-1x-near miss",
        ];
        for title in titles {
            let name = derive_filename(title, may_10());
            assert!(matches_filename_shape(&name), "{title:?} produced {name:?}");
        }
    }

    #[test]
    fn test_title_from_filename() {
        assert_eq!(title_from_filename("2025-05-10-my-first-post.md"), "my first post");
        assert_eq!(title_from_filename("no-date-here.md"), "no date here");
        assert_eq!(title_from_filename("2025-05-10-.md"), "");
    }

    #[test]
    fn test_title_survives_second_derivation() {
        let first = derive_filename("My First Post", may_10());
        let later = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(derive_filename(&title_from_filename(&first), later), "2025-06-01-my-first-post.md");
    }
}
