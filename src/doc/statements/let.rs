/*!
# `[LET] <variable> = <expression>`

## Purpose
Assigns a value to a variable.

## Remarks
The word `LET` is optional. Builtin function names can't be assigned.

## Example
```text
LET A = 1
B$ = "TWO"
```

*/
