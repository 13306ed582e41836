mod common;
use common::*;

#[test]
fn test_arithmetic_precedence() {
    let (mut r, io) = machine();
    r.enter("PRINT 1 + 2 * 3");
    r.enter("PRINT (1 + 2) * 3");
    r.enter("PRINT 8 - 3 - 2");
    r.enter("PRINT 2 ^ 3 ^ 2");
    assert_eq!(exec(&mut r, &io), "7\n9\n3\n64\n");
}

#[test]
fn test_unary_minus() {
    let (mut r, io) = machine();
    r.enter("PRINT -2 ^ 2");
    r.enter("PRINT -7 MOD 3");
    r.enter("PRINT 7 MOD -3");
    assert_eq!(exec(&mut r, &io), "-4\n2\n-2\n");
}

#[test]
fn test_number_formatting() {
    let (mut r, io) = machine();
    r.enter("PRINT 7 / 2; \" \"; 8 / 2; \" \"; 0.1 + 0.2 > 0.3");
    assert_eq!(exec(&mut r, &io), "3.5 4 TRUE\n");
}

#[test]
fn test_strings() {
    let (mut r, io) = machine();
    r.enter(r#"A$ = "AB""#);
    r.enter(r#"PRINT A$ + "CD""#);
    r.enter(r#"PRINT "APPLE" < "BANANA""#);
    r.enter(r#"PRINT A$ = "AB""#);
    assert_eq!(exec(&mut r, &io), "ABCD\nTRUE\nTRUE\n");
}

#[test]
fn test_type_mismatch() {
    let (mut r, io) = machine();
    r.enter(r#"PRINT "A" + 1"#);
    r.enter(r#"PRINT "A" < 1"#);
    r.enter(r#"A$ = 5"#);
    assert_eq!(
        exec(&mut r, &io),
        "?TYPE MISMATCH\n?TYPE MISMATCH\n?TYPE MISMATCH; A$\n"
    );
}

#[test]
fn test_booleans_are_numbers() {
    let (mut r, io) = machine();
    r.enter("PRINT (1 < 2) + 1");
    r.enter("PRINT NOT 0; \" \"; NOT 5");
    assert_eq!(exec(&mut r, &io), "2\nTRUE FALSE\n");
}

#[test]
fn test_logic_short_circuits() {
    let (mut r, io) = machine();
    r.enter("PRINT 0 AND 1 / 0");
    r.enter("PRINT 1 OR NOPE");
    r.enter("PRINT 1 < 2 AND 2 < 3 OR 0");
    assert_eq!(exec(&mut r, &io), "FALSE\nTRUE\nTRUE\n");
}

#[test]
fn test_variable_names_are_case_sensitive() {
    let (mut r, io) = machine();
    r.enter("A = 1");
    r.enter("a = 2");
    r.enter("PRINT A; a");
    r.enter("PRINT b");
    assert_eq!(exec(&mut r, &io), "12\n?UNDEFINED VARIABLE; b\n");
}

#[test]
fn test_arithmetic_errors() {
    let (mut r, io) = machine();
    r.enter("PRINT 1 / 0");
    r.enter("PRINT 5 MOD 0");
    r.enter("PRINT 0 ^ -1");
    r.enter("PRINT 10 ^ 400");
    assert_eq!(
        exec(&mut r, &io),
        "?DIVISION BY ZERO\n?DIVISION BY ZERO\n?DIVISION BY ZERO\n?OVERFLOW\n"
    );
}

#[test]
fn test_syntax_errors_in_direct_mode() {
    let (mut r, io) = machine();
    r.enter("PRINT (1 + 2");
    r.enter("PRINT 1 +");
    let out = exec(&mut r, &io);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.starts_with("?SYNTAX ERROR")));
}
