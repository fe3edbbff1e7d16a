use proptest::prelude::*;
use release_fs::NormalizedPath;

proptest! {
    #[test]
    fn normalization_is_stable(s in "[a-zA-Z0-9_./\\\\-]{0,40}") {
        let path = NormalizedPath::new(&s);
        let as_str = path.as_str();

        // No backslashes survive normalization
        prop_assert!(!as_str.contains('\\'));

        // Only a leading network prefix may contain a double slash
        let remainder = as_str.strip_prefix("//").unwrap_or(as_str);
        prop_assert!(!remainder.contains("//"));

        // Normalizing twice changes nothing
        let again = NormalizedPath::new(as_str);
        prop_assert_eq!(&path, &again);
    }

    #[test]
    fn join_with_empty_or_dot_is_identity(a in "[a-z0-9_/.-]{0,30}", b in prop_oneof![Just(""), Just(".")]) {
        let base = NormalizedPath::new(&a);
        prop_assert_eq!(base.join(b), base);
    }

    #[test]
    fn joined_relative_segment_keeps_file_name(dir in "[a-z]{1,8}(/[a-z]{1,8}){0,3}", file in "[a-z]{1,8}\\.(zip|jar|tar\\.gz)") {
        let joined = NormalizedPath::new(&dir).join(&file);
        prop_assert_eq!(joined.file_name(), Some(file.as_str()));
        prop_assert!(joined.as_str().starts_with(&dir));
    }
}
