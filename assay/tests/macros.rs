use assay::decorate::{HIGHLIGHT, RESET};
use assay::testing::{self, Recorder};
use pretty_assertions::assert_eq;

assay::describe!("Arithmetic", {
    assay::test!("adds small numbers", fn(t) {
        assay::check_equals(t, 2 + 2, 4);
        assay::check!(t, 3 > 2, "three should exceed {}", 2);
    });

    assay::test!("parses numbers", fn(t: &mut assay::TestCase) {
        let parsed = "42".parse::<i32>();
        assay::assert_ok(t, &parsed);
        assay::check_equals(t, parsed.ok(), Some(42));
    });

    assay::test!("runs without a host", fn() {
        let name = testing::current_test_name();
        assert!(name.as_deref() == Some("runs without a host"));
    });
});

assay::describe!("Collections", {
    assay::test!("compares by content", fn(t) {
        let left: Vec<Box<u32>> = vec![Box::new(1), Box::new(2)];
        let right: Vec<Box<u32>> = vec![Box::new(1), Box::new(2)];
        assay::assert_equals(t, &left, &right);
    });
});

// Expands to `mod type_ { fn match_() .. fn done() .. }`
assay::describe!("Type", {
    assay::test!("match", fn(t) {
        assay::check_equals(t, testing::current_test_name().as_deref(), Some("match"));
    });

    assay::test!("½ done", fn(t) {
        assay::check_equals(t, testing::current_test_name().as_deref(), Some("½ done"));
    });
});

#[test]
fn reports_the_line_of_the_caller() {
    let mut host = Recorder::new();
    let line = line!() + 1;
    assay::check!(&mut host, false, "check val={}", 5);

    assert_eq!(
        host.text(),
        format!("{HIGHLIGHT}macros.rs:{line}: check val=5{RESET}\n\n")
    );
}

#[test]
fn helpers_can_forward_the_caller() {
    #[track_caller]
    fn check_even(host: &mut Recorder, n: u32) {
        assay::check(host, n % 2 == 0, format_args!("{n} is odd"));
    }

    let mut host = Recorder::new();
    let line = line!() + 1;
    check_even(&mut host, 3);

    assert_eq!(
        host.text(),
        format!("{HIGHLIGHT}macros.rs:{line}: 3 is odd{RESET}\n\n")
    );
}

#[test]
#[should_panic(expected = "test `lenient` failed: 2 check(s) failed")]
fn failed_checks_fail_the_test_after_the_body() {
    testing::run("lenient", |t| {
        assay::check_equals(t, "a", "b");
        assay::check_ok(t, &Err::<(), _>("disk full"));
        assay::check!(t, true, "passes");
    });
}

#[test]
#[should_panic(expected = "test `strict` aborted by a failed assertion")]
fn failed_assertion_stops_the_test() {
    testing::run("strict", |t| {
        assay::assert_that!(t, 1 > 2);
        unreachable!("assertion should have stopped the test");
    });
}
