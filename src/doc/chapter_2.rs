/*!
# Statements

Every program line holds a single statement. Most statements also work
in direct mode. `FOR`, `NEXT`, `GOSUB` and `RETURN` need a running
program and report `ILLEGAL DIRECT` otherwise.

## Graphics
`CLS`, `PLOT x, y`, `LINE x1, y1, x2, y2`, `CIRCLE x, y, r` and
`RECTANGLE x1, y1, x2, y2` draw on the graphics device. The device is
set up the first time one of them runs. When no graphics device is
attached they report `DEVICE UNAVAILABLE; GRAPHICS`.

## Odds and ends
 * `WAIT s` pauses for `s` seconds. Fractions are fine.
 * `DATE` and `TIME` print the current date and time.
 * `INKEY$` waits for one key and prints it.
 * `TRACE` toggles printing of each line number as it executes.
 * `HELP` prints a summary of the statements.
 * `NEW` erases the program and all variables.
 * `QUIT` leaves the interpreter.
*/

#[path = "statements/data.rs"]
#[allow(non_snake_case)]
pub mod DATA;

#[path = "statements/def.rs"]
#[allow(non_snake_case)]
pub mod DEF;

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "statements/gosub.rs"]
#[allow(non_snake_case)]
pub mod GOSUB;

#[path = "statements/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/list.rs"]
#[allow(non_snake_case)]
pub mod LIST;

#[path = "statements/load.rs"]
#[allow(non_snake_case)]
pub mod LOAD;

#[path = "statements/next.rs"]
#[allow(non_snake_case)]
pub mod NEXT;

#[path = "statements/open.rs"]
#[allow(non_snake_case)]
pub mod OPEN;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/read.rs"]
#[allow(non_snake_case)]
pub mod READ;

#[path = "statements/rem.rs"]
#[allow(non_snake_case)]
pub mod REM;

#[path = "statements/restore.rs"]
#[allow(non_snake_case)]
pub mod RESTORE;

#[path = "statements/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "statements/run.rs"]
#[allow(non_snake_case)]
pub mod RUN;

#[path = "statements/save.rs"]
#[allow(non_snake_case)]
pub mod SAVE;

#[path = "statements/stop.rs"]
#[allow(non_snake_case)]
pub mod STOP;
