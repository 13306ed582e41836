/*!
# `GOTO <line number>`

## Purpose
Moves execution to another line.

## Remarks
The line number may be any expression. A line that doesn't exist is
an `UNDEFINED LINE` error and execution carries on with the next line.
In direct mode `GOTO` starts the program at that line without clearing
variables.

## Example
```text
10 GOTO 30
20 PRINT "THIS WILL NOT PRINT"
30 PRINT "THIS WILL PRINT"
```

*/
