use super::*;

#[test]
fn test_lf() {
    let l = Line::from_str("run\n").unwrap();
    assert!(l.is_direct());
    assert_eq!(l.text(), "run");
}

#[test]
fn test_crlf() {
    let l = Line::from_str("10 list\r\n").unwrap();
    assert_eq!(l.number(), Some(10));
    assert_eq!(l.text(), "list");
}

#[test]
fn test_no_space_after_number() {
    let l = Line::from_str("20PRINT X").unwrap();
    assert_eq!(l.number(), Some(20));
    assert_eq!(l.text(), "PRINT X");
    assert_eq!(l.to_string(), "20 PRINT X");
}

#[test]
fn test_empty_body() {
    let l = Line::from_str("30").unwrap();
    assert_eq!(l.number(), Some(30));
    assert!(l.is_empty());
    assert_eq!(l.ast().unwrap(), ast::Statement::Rem);
}

#[test]
fn test_bad_numbers() {
    let e = Line::from_str("0 PRINT").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::MalformedLine);
    assert!(Line::from_str("99999999999 END").is_err());
}

#[test]
fn test_ast_error_names_line() {
    let l = Line::from_str("40 IF X PRINT").unwrap();
    assert_eq!(l.ast().unwrap_err().line_number(), Some(40));
}
