//! trybuild compile-time tests for the Injectable derive

#[test]
fn trybuild_injectable_derive() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/ok_injectable.rs");
    t.pass("tests/trybuild/ok_lifecycle.rs");
    t.pass("tests/trybuild/ok_generic.rs");
}
