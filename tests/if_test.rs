mod common;
use common::*;

#[test]
fn test_if_then() {
    let (mut r, io) = machine();
    r.enter(r#"IF 1 THEN PRINT "ONE""#);
    r.enter(r#"IF 0 THEN PRINT "ZERO""#);
    assert_eq!(exec(&mut r, &io), "ONE\n");
}

#[test]
fn test_if_then_else() {
    let (mut r, io) = machine();
    r.enter(r#"IF 0 THEN PRINT "ONE" ELSE PRINT "TWO""#);
    r.enter(r#"IF 1 THEN PRINT "ONE" ELSE PRINT "TWO""#);
    r.enter(r#"IF 2 > 1 THEN A = 1 ELSE A = 2"#);
    r.enter("PRINT A");
    assert_eq!(exec(&mut r, &io), "TWO\nONE\n1\n");
}

#[test]
fn test_if_line_numbers() {
    let (mut r, io) = machine();
    program(
        &mut r,
        &[
            "10 A = 1",
            "20 IF A = 1 THEN 50 ELSE 60",
            "30 IF A = 2 GOTO 60",
            "40 END",
            "50 PRINT \"FIFTY\"",
            "52 A = 2",
            "55 GOTO 30",
            "60 PRINT \"SIXTY\"",
            "RUN",
        ],
    );
    assert_eq!(exec(&mut r, &io), "FIFTY\nSIXTY\n");
}

#[test]
fn test_if_loop() {
    let (mut r, io) = machine();
    program(
        &mut r,
        &[
            "10 A = 10",
            "20 IF A < 30 THEN PRINT A ELSE END",
            "30 A = A + 10",
            "40 GOTO 20",
            "RUN",
        ],
    );
    assert_eq!(exec(&mut r, &io), "10\n20\n");
}

#[test]
fn test_if_errors() {
    let (mut r, io) = machine();
    r.enter(r#"IF 1 PRINT "X""#);
    r.enter(r#"IF "A" THEN PRINT "X""#);
    assert_eq!(
        exec(&mut r, &io),
        "?SYNTAX ERROR; MISSING THEN\n?TYPE MISMATCH\n"
    );
}
