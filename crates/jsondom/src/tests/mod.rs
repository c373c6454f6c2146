mod arbitrary;
mod parse_bad;
mod print;

#[test]
fn version_matches_components() {
    assert_eq!(
        crate::version(),
        format!(
            "{}.{}.{}",
            crate::VERSION_MAJOR,
            crate::VERSION_MINOR,
            crate::VERSION_PATCH
        )
    );
}
