/*!
# Errors

Errors print with a leading question mark. The line number follows
when a program line caused it, and some errors add a detail after a
semicolon.
```text
?UNDEFINED LINE IN 10; 99
```

After an error in a running program execution continues with the
next line. Errors from a direct mode statement just return to `READY.`

| Error | Cause |
|-------|-------|
| `SYNTAX ERROR` | A line couldn't be parsed. The detail says what was expected. |
| `UNKNOWN STATEMENT` | The line doesn't start with a statement or an assignment. |
| `MALFORMED LINE` | A line number is zero or too large, or a loaded file has a line without a number. |
| `UNDEFINED LINE` | `GOTO` or `GOSUB` named a line that doesn't exist. |
| `UNDEFINED VARIABLE` | A variable or function was used before it was defined. |
| `TYPE MISMATCH` | A string where a number belongs, or the other way around. |
| `DIVISION BY ZERO` | Division or `MOD` by zero. |
| `OVERFLOW` | A result too large to represent. |
| `ILLEGAL FUNCTION CALL` | An argument outside what a function accepts. |
| `WRONG NUMBER OF ARGUMENTS` | A function call with too many or too few arguments. |
| `NEXT WITHOUT FOR` | `NEXT` with no open loop. |
| `RETURN WITHOUT GOSUB` | `RETURN` with no pending `GOSUB`. |
| `OUT OF DATA` | `READ` past the last `DATA` item. |
| `ILLEGAL DIRECT` | `FOR`, `NEXT`, `GOSUB` or `RETURN` in direct mode. |
| `BAD FILE NUMBER` | A file number that isn't open or can't be used. |
| `FILE NOT FOUND` | `LOAD` or `OPEN` of a missing file. |
| `DISK I/O ERROR` | Any other failure reading or writing a file. |
| `DEVICE UNAVAILABLE` | Graphics used with no graphics device attached. |
*/
