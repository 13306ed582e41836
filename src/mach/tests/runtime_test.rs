use super::*;
use crate::lang::Ident;

#[test]
fn test_gosub_return_resumes_after_gosub_line() {
    let (mut r, out) = runtime();
    r.load_str(
        r#"
10 GOSUB 100
20 PRINT "BACK"
30 END
100 PRINT "SUB"
110 RETURN
"#,
    )
    .unwrap();
    r.start();
    assert_eq!(run(&mut r, &out), "SUB\nBACK\n");
    assert_eq!(r.call_depth(), 0);
}

#[test]
fn test_nested_gosub() {
    let (mut r, out) = runtime();
    r.load_str(
        r#"
10 GOSUB 100
20 END
100 PRINT "A";
110 GOSUB 200
120 PRINT "C";
130 RETURN
200 PRINT "B";
210 RETURN
"#,
    )
    .unwrap();
    r.start();
    assert_eq!(run(&mut r, &out), "ABC");
}

#[test]
fn test_return_without_gosub_continues() {
    let (mut r, out) = runtime();
    r.load_str("10 RETURN\n20 PRINT \"NEXT\"").unwrap();
    r.start();
    assert_eq!(run(&mut r, &out), "?RETURN WITHOUT GOSUB IN 10\nNEXT\n");
}

#[test]
fn test_goto_missing_line() {
    let (mut r, out) = runtime();
    r.load_str("10 GOTO 99\n20 PRINT \"ON\"").unwrap();
    r.start();
    assert_eq!(run(&mut r, &out), "?UNDEFINED LINE IN 10; 99\nON\n");
}

#[test]
fn test_error_reports_and_continues() {
    let (mut r, out) = runtime();
    r.load_str("10 PRINT 1/0\n20 PRINT \"OK\"").unwrap();
    r.start();
    assert_eq!(run(&mut r, &out), "?DIVISION BY ZERO IN 10\nOK\n");
}

#[test]
fn test_stop_and_end() {
    let (mut r, out) = runtime();
    r.load_str("10 PRINT 1\n20 STOP\n30 PRINT 2").unwrap();
    r.start();
    assert_eq!(run(&mut r, &out), "1\nBREAK IN 20\n");
    assert_eq!(r.state(), State::Halted);
    r.load_str("10 END\n20 PRINT 2").unwrap();
    r.start();
    assert_eq!(run(&mut r, &out), "");
}

#[test]
fn test_quit_sets_flag() {
    let (mut r, out) = runtime();
    r.load_str("10 QUIT\n20 PRINT 2").unwrap();
    r.start();
    assert_eq!(run(&mut r, &out), "");
    assert!(r.is_quit());
}

#[test]
fn test_interrupt() {
    let (mut r, out) = runtime();
    r.load_str("10 GOTO 10").unwrap();
    r.start();
    r.execute_cycles(10);
    r.halt_handle()
        .store(true, std::sync::atomic::Ordering::SeqCst);
    assert_eq!(run(&mut r, &out), "BREAK IN 10\n");
}

#[test]
fn test_cycle_limit() {
    let (mut r, out) = runtime();
    r.load_str("10 GOTO 10").unwrap();
    r.start();
    assert_eq!(
        run_cycles(&mut r, &out, 100),
        "\n100 Execution cycles exceeded.\n"
    );
    assert_eq!(r.pc(), Some(10));
}

#[test]
fn test_trace() {
    let config = Config {
        trace: true,
        ..Config::default()
    };
    let (mut r, out) = runtime_with(config, &[]);
    r.load_str("10 A = 1\n20 PRINT A").unwrap();
    r.start();
    assert_eq!(run(&mut r, &out), "[10][20]1\n");
    r.enter("TRACE");
    assert_eq!(out.take(), "TRACE OFF\n");
    assert!(!r.is_tracing());
}

#[test]
fn test_direct_mode() {
    let (mut r, out) = runtime();
    r.enter("PRINT 2+3*4");
    assert_eq!(out.take(), "14\n");
    r.enter("X = 5");
    r.enter("? X * 2");
    assert_eq!(out.take(), "10\n");
    r.enter("GOSUB 10");
    assert_eq!(out.take(), "?ILLEGAL DIRECT\n");
    r.enter("RETURN");
    assert_eq!(out.take(), "?ILLEGAL DIRECT\n");
}

#[test]
fn test_direct_goto_starts_running() {
    let (mut r, out) = runtime();
    r.enter("10 PRINT \"TEN\"");
    r.enter("20 PRINT \"TWENTY\"");
    assert_eq!(r.enter("GOTO 20"), State::Running);
    assert_eq!(run(&mut r, &out), "TWENTY\n");
}

#[test]
fn test_editing_lines() {
    let (mut r, out) = runtime();
    r.enter("20 PRINT \"B\"");
    r.enter("10 PRINT \"A\"");
    r.enter("30 PRINT \"C\"");
    r.enter("20");
    r.enter("LIST");
    assert_eq!(out.take(), "10 PRINT \"A\"\n30 PRINT \"C\"\n");
    assert_eq!(r.enter("RUN"), State::Running);
    assert_eq!(run(&mut r, &out), "A\nC\n");
}

#[test]
fn test_run_clears_variables() {
    let (mut r, out) = runtime();
    r.enter("X = 1");
    r.enter("10 PRINT X");
    r.enter("RUN");
    assert_eq!(run(&mut r, &out), "?UNDEFINED VARIABLE IN 10; X\n");
    assert!(!r.vars().contains(&Ident::new("X")));
}

#[test]
fn test_new() {
    let (mut r, out) = runtime();
    r.load_str("10 PRINT 1\n20 DATA 5").unwrap();
    assert_eq!(r.data().len(), 1);
    r.enter("NEW");
    assert!(r.listing().is_empty());
    assert!(r.data().is_empty());
    r.enter("LIST");
    assert_eq!(out.take(), "");
}

#[test]
fn test_malformed_line_is_reported() {
    let (mut r, out) = runtime();
    r.enter("0 PRINT");
    assert_eq!(out.take(), "?MALFORMED LINE; INVALID LINE NUMBER 0\n");
}

#[test]
fn test_syntax_error_line_runs_past() {
    let (mut r, out) = runtime();
    r.load_str("10 PRINT (1\n20 PRINT 2").unwrap();
    r.start();
    assert_eq!(
        run(&mut r, &out),
        "?SYNTAX ERROR IN 10; EXPECTED RIGHT PARENTHESIS\n2\n"
    );
}

#[test]
fn test_seeded_rnd_repeats() {
    let config = Config {
        seed: Some(7),
        ..Config::default()
    };
    let (mut a, out_a) = runtime_with(config.clone(), &[]);
    let (mut b, out_b) = runtime_with(config, &[]);
    a.enter("PRINT RND; RND(1)");
    b.enter("PRINT RND; RND(1)");
    assert_eq!(out_a.take(), out_b.take());
}

#[test]
fn test_interrupt_at_prompt_is_forgotten() {
    let (mut r, out) = runtime();
    r.load_str("10 PRINT 1").unwrap();
    r.interrupt();
    r.start();
    assert_eq!(run(&mut r, &out), "1\n");
}

#[test]
fn test_wait_too_long_is_an_error() {
    let (mut r, out) = runtime();
    r.load_str("10 WAIT 1E20\n20 PRINT \"AFTER\"").unwrap();
    r.start();
    assert_eq!(run(&mut r, &out), "?ILLEGAL FUNCTION CALL IN 10\nAFTER\n");
}
