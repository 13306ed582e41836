mod common;
use common::*;

#[test]
fn test_print_to_file() {
    let (mut r, io) = machine();
    program(
        &mut r,
        &[
            r#"10 OPEN "out.txt" FOR OUTPUT AS #1"#,
            r#"20 PRINT #1, "HELLO"; 42"#,
            r#"30 PRINT #1, "A", "B""#,
            "40 CLOSE #1",
            "RUN",
        ],
    );
    assert_eq!(exec(&mut r, &io), "");
    assert_eq!(io.file("out.txt").as_deref(), Some("HELLO42\nA\tB\n"));
}

#[test]
fn test_bad_file_numbers() {
    let (mut r, io) = machine();
    program(
        &mut r,
        &[
            r#"10 PRINT #2, "NOPE""#,
            "20 CLOSE 3",
            r#"30 OPEN "x" FOR OUTPUT AS -1"#,
            r#"40 OPEN "x" FOR OUTPUT AS 1.5"#,
            "RUN",
        ],
    );
    assert_eq!(
        exec(&mut r, &io),
        "?BAD FILE NUMBER IN 10\n?BAD FILE NUMBER IN 20\n\
         ?BAD FILE NUMBER IN 30\n?BAD FILE NUMBER IN 40\n"
    );
}

#[test]
fn test_open_missing_for_input() {
    let (mut r, io) = machine();
    r.enter(r#"OPEN "missing.txt" FOR INPUT AS 1"#);
    r.enter(r#"OPEN 5 FOR INPUT AS 1"#);
    assert_eq!(
        exec(&mut r, &io),
        "?FILE NOT FOUND; missing.txt\n?TYPE MISMATCH\n"
    );
}

#[test]
fn test_new_closes_files() {
    let (mut r, io) = machine();
    program(
        &mut r,
        &[
            r#"10 OPEN "log.txt" FOR OUTPUT AS 1"#,
            r#"20 PRINT #1, "X""#,
            "RUN",
        ],
    );
    assert_eq!(exec(&mut r, &io), "");
    assert_eq!(io.file("log.txt"), None);
    r.enter("NEW");
    assert_eq!(io.file("log.txt").as_deref(), Some("X\n"));
}
