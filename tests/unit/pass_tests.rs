use pdfscrub::{Category, ChangeEntry, SanitizeOptions, Sanitizer};

use crate::fixtures::{contains, TestFixtures};

fn run_only(category: Category, input: Vec<u8>) -> (Vec<u8>, pdfscrub::ChangeReport) {
    Sanitizer::new(SanitizeOptions::only(&[category])).sanitize_bytes(input, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category_rewrites_its_single_occurrence() {
        for category in Category::ALL {
            let (output, report) = run_only(category, TestFixtures::single_occurrence(category));

            assert!(
                contains(&output, TestFixtures::expected_value(category)),
                "{}: expected {}",
                category,
                String::from_utf8_lossy(TestFixtures::expected_value(category))
            );
            assert!(report.entry(category).is_set(), "{}: not reported", category);

            // Nothing else is reported
            for other in Category::ALL.into_iter().filter(|&c| c != category) {
                assert!(!report.entry(other).is_set(), "{} leaked into {}", category, other);
            }
        }
    }

    #[test]
    fn test_each_category_is_noop_without_occurrence() {
        let input = TestFixtures::bare_pdf();
        for category in Category::ALL {
            let (output, report) = run_only(category, input.clone());

            assert_eq!(output, input, "{}: buffer changed", category);
            match category {
                // Always true when the XMP pass runs
                Category::Xmp => assert_eq!(report.entry(category), ChangeEntry::Flag(true)),
                _ => assert!(!report.entry(category).is_set(), "{}: reported", category),
            }
        }
    }

    #[test]
    fn test_disabled_category_left_untouched() {
        let input = TestFixtures::single_occurrence(Category::Author);
        let (output, report) = Sanitizer::new(SanitizeOptions::all().with(Category::Author, false))
            .sanitize_bytes(input.clone(), None);

        assert!(contains(&output, b"/Author(John Doe)"));
        assert!(!report.author);
    }

    #[test]
    fn test_locale_round_trip_counts_every_tag() {
        for n in 1..=4 {
            let content = b"q /Lang(he) Q ".repeat(n);
            let input = TestFixtures::pdf(b"", &TestFixtures::compressed_stream(5, &content), b"");
            let (output, report) = run_only(Category::LangTags, input);

            assert_eq!(report.lang_tags, n);
            let expected = b"q /Lang(en) Q ".repeat(n);
            assert_eq!(TestFixtures::decoded_streams(&output), vec![expected]);
        }
    }

    #[test]
    fn test_timezone_example() {
        let input = b"/CreationDate(D:20230615120000+02'00')".to_vec();
        let (output, report) = run_only(Category::Timezone, input);
        assert_eq!(output, b"/CreationDate(D:20230615120000Z)".to_vec());
        assert!(report.timezone);

        for kept in [&b"(D:20230615120000Z)"[..], b"(D:20230615120000)"] {
            let (output, report) = run_only(Category::Timezone, kept.to_vec());
            assert_eq!(output, kept.to_vec());
            assert!(!report.timezone);
        }
    }

    #[test]
    fn test_document_id_example() {
        let input = b"/ID[<0123456789abcdef0123456789abcdf0><0123456789abcdef0123456789abcdf1>]".to_vec();
        let (output, report) = run_only(Category::DocId, input);
        assert_eq!(
            output,
            b"/ID[<00000000000000000000000000000000><00000000000000000000000000000000>]".to_vec()
        );
        assert!(report.doc_id);
    }

    #[test]
    fn test_broken_stream_does_not_abort_run() {
        let mut objects = b"5 0 obj\n<</Filter/FlateDecode>>\nstream\r\n\x78\x9c\xff\xff garbage\r\nendstream\nendobj\n".to_vec();
        objects.extend(TestFixtures::compressed_stream(6, b"/Lang(he)"));
        let input = TestFixtures::pdf(b"/Author(Jane)", &objects, b"");

        let (output, report) = Sanitizer::default().sanitize_bytes(input, None);
        assert!(contains(&output, b"\x78\x9c\xff\xff garbage"));
        assert_eq!(report.lang_tags, 1);
        assert!(report.author);
    }
}
