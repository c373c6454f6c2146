use rstest::rstest;

use crate::{AllocHooks, ParseError, ParseOptions, parse, parse_with_options};

#[rstest]
#[case("", 0)]
#[case("   ", 3)]
#[case("nul", 0)]
#[case("nulL", 0)]
#[case("falsy", 0)]
#[case("True", 0)]
#[case("+5", 0)]
#[case(".5", 0)]
#[case("-", 0)]
#[case("-x", 0)]
#[case("'single'", 0)]
#[case("[", 1)]
#[case("[1", 2)]
#[case("[1,", 3)]
#[case("[1 2]", 3)]
#[case("[,1]", 1)]
#[case("[}", 1)]
#[case("{", 1)]
#[case("{]", 1)]
#[case("{a:1}", 1)]
#[case("{\"a\"", 4)]
#[case("{\"a\" 1}", 5)]
#[case("{\"a\":}", 5)]
#[case("{\"a\":1", 6)]
#[case("{\"a\":1,", 7)]
#[case("{\"a\":1 \"b\":2}", 7)]
fn malformed_inputs_report_the_offending_byte(#[case] text: &str, #[case] offset: usize) {
    assert_eq!(
        parse(text).unwrap_err(),
        ParseError::Syntax { offset },
        "input: {text:?}"
    );
}

#[test]
fn error_offsets_expose_themselves() {
    let error = parse("[oops]").unwrap_err();
    assert_eq!(error.offset(), Some(1));
    assert_eq!(ParseError::OutOfMemory.offset(), None);
}

#[test]
fn trailing_garbage_fails_only_when_end_is_required() {
    assert!(parse("1 tail").is_ok());

    let strict = ParseOptions {
        require_end: true,
        ..ParseOptions::default()
    };
    assert_eq!(
        parse_with_options("1 tail", &strict).unwrap_err(),
        ParseError::Syntax { offset: 2 }
    );
    // strict JSON: the hex suffix counts as trailing garbage
    assert_eq!(
        parse_with_options("0x10", &strict).unwrap_err(),
        ParseError::Syntax { offset: 1 }
    );
    assert_eq!(
        parse_with_options("1.", &strict).unwrap_err(),
        ParseError::Syntax { offset: 1 }
    );
}

#[test]
fn nesting_past_the_limit_is_rejected() {
    let options = ParseOptions {
        max_depth: 3,
        ..ParseOptions::default()
    };
    assert_eq!(
        parse_with_options("[[[[[]]]]]", &options).unwrap_err(),
        ParseError::Depth { offset: 4 }
    );

    let runaway = "[".repeat(1002);
    assert!(matches!(
        parse(&runaway).unwrap_err(),
        ParseError::Depth { .. }
    ));
}

struct RefuseEverything;

impl AllocHooks for RefuseEverything {
    fn allocate(&self, _size: usize) -> bool {
        false
    }

    fn release(&self, _size: usize) {}
}

#[test]
fn vetoed_allocation_fails_the_parse() {
    let options = ParseOptions {
        hooks: &RefuseEverything,
        ..ParseOptions::default()
    };
    assert_eq!(
        parse_with_options(r#"["some text"]"#, &options).unwrap_err(),
        ParseError::OutOfMemory
    );
}

#[test]
fn partial_trees_do_not_leak_into_results() {
    // the array assembles two children before the failure is discovered
    assert_eq!(parse("[1,2,@]").unwrap_err(), ParseError::Syntax { offset: 5 });
}
