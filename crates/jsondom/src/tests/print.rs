use std::rc::Rc;

use rstest::rstest;

use crate::{AllocHooks, PrintError, PrintOptions, Value, parse};

#[test]
fn compact_object_round_trips_textually() {
    let text = r#"{"a":1,"b":[true,null],"c":{}}"#;
    assert_eq!(parse(text).unwrap().print(false).unwrap(), text);
}

#[test]
fn formatted_objects_indent_and_arrays_stay_inline() {
    let tree = parse(r#"{"a":1,"b":[true,null],"c":{}}"#).unwrap();
    assert_eq!(
        tree.print(true).unwrap(),
        "{\n\t\"a\":\t1,\n\t\"b\":\t[true, null],\n\t\"c\":\t{\n\t}\n}"
    );
}

#[test]
fn formatted_empty_containers() {
    assert_eq!(Value::object().print(true).unwrap(), "{\n}");
    assert_eq!(Value::array().print(true).unwrap(), "[]");
}

#[rstest]
#[case(Value::Number(0.0), "0")]
#[case(Value::Number(f64::NAN), "null")]
#[case(Value::Number(f64::INFINITY), "null")]
#[case(Value::Number(1.0e100), "1.000000e+100")]
#[case(Value::Number(3.0), "3")]
#[case(Value::Number(0.5), "0.500000")]
fn number_rendering(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(value.print(false).unwrap(), expected);
    assert_eq!(value.print_buffered(0, false).unwrap(), expected);
}

#[test]
fn raw_payloads_are_emitted_verbatim() {
    let mut object = Value::object();
    object.add_member("legacy", Value::raw("{\"x\": 1,}"));
    assert_eq!(
        object.print(false).unwrap(),
        "{\"legacy\":{\"x\": 1,}}"
    );
}

#[test]
fn references_print_their_target() {
    let shared = Rc::new(parse("[1,2]").unwrap());
    let mut array = Value::array();
    array.add_item_reference(&shared);
    assert_eq!(array.print(false).unwrap(), "[[1,2]]");
}

#[test]
fn every_control_byte_is_escaped_and_recovered() {
    for byte in 1u8..0x20 {
        let original = Value::String(char::from(byte).to_string());
        let printed = original.print(false).unwrap();
        assert!(printed.contains('\\'), "byte {byte:#04x} was not escaped");
        assert_eq!(parse(&printed).unwrap(), original, "byte {byte:#04x}");
    }
}

#[test]
fn printing_modes_emit_identical_bytes() {
    let tree = parse(r#"{"k":"va\"l","list":[1,2.5,{"n":[]}],"e":{}}"#).unwrap();
    for format in [false, true] {
        let standalone = tree.print(format).unwrap();
        assert_eq!(tree.print_buffered(0, format).unwrap(), standalone);
        assert_eq!(tree.print_buffered(512, format).unwrap(), standalone);

        let mut buf = [0u8; 512];
        let written = tree.print_preallocated(&mut buf, format).unwrap();
        assert_eq!(&buf[..written], standalone.as_bytes());
    }
    assert_eq!(tree.to_string(), tree.print(false).unwrap());
}

#[test]
fn preallocated_printing_never_grows() {
    let tree = parse("[1,2,3]").unwrap();
    let rendered = tree.print(false).unwrap();

    let mut exact = vec![0u8; rendered.len()];
    assert_eq!(
        tree.print_preallocated(&mut exact, false).unwrap(),
        rendered.len()
    );

    let mut small = vec![0u8; rendered.len() - 1];
    assert_eq!(
        tree.print_preallocated(&mut small, false).unwrap_err(),
        PrintError::BufferTooSmall
    );
}

#[test]
fn nul_prints_as_unicode_escape() {
    // the parser rejects \u0000 on input, but printing a string that
    // contains it must still escape correctly
    let value = Value::String("\u{0}".to_owned());
    assert_eq!(value.print(false).unwrap(), r#""\u0000""#);
}

struct RefuseEverything;

impl AllocHooks for RefuseEverything {
    fn allocate(&self, _size: usize) -> bool {
        false
    }

    fn release(&self, _size: usize) {}
}

#[test]
fn standalone_printing_balances_its_hook_claims() {
    use std::cell::Cell;

    #[derive(Default)]
    struct CallLedger {
        claimed: Cell<usize>,
        released: Cell<usize>,
    }

    impl AllocHooks for CallLedger {
        fn allocate(&self, _size: usize) -> bool {
            self.claimed.set(self.claimed.get() + 1);
            true
        }

        fn release(&self, _size: usize) {
            self.released.set(self.released.get() + 1);
        }
    }

    let tree = parse(r#"{"k":"v","list":["a",["b"],1]}"#).unwrap();
    let ledger = CallLedger::default();
    let options = PrintOptions {
        format: true,
        hooks: &ledger,
    };
    let printed = tree.print_with_options(&options).unwrap();
    assert!(!printed.is_empty());
    // every transient child buffer is released again; only the string handed
    // back to the caller stays claimed
    assert_eq!(ledger.claimed.get(), ledger.released.get() + 1);
}

#[test]
fn vetoed_allocation_fails_the_print() {
    let tree = parse(r#"{"a":["text",1]}"#).unwrap();
    let options = PrintOptions {
        hooks: &RefuseEverything,
        ..PrintOptions::default()
    };
    assert_eq!(
        tree.print_with_options(&options).unwrap_err(),
        PrintError::OutOfMemory
    );
}

#[test]
fn deep_tree_through_a_tiny_prebuffer() {
    let text = format!(
        "[{}]",
        (0..100).map(|i| i.to_string()).collect::<Vec<_>>().join(",")
    );
    let tree = parse(&text).unwrap();
    assert_eq!(tree.print_buffered(1, false).unwrap(), text);
}
