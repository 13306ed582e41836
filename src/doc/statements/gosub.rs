/*!
# `GOSUB <line number>`
Also see `RETURN`.

## Purpose
Calls a subroutine.

## Remarks
Execution moves to the line and `RETURN` comes back to the line after
the `GOSUB`. Subroutines may call other subroutines.

## Example
```text
10 GOSUB 100
20 PRINT "B"
30 END
100 PRINT "A";
110 RETURN
RUN
AB
```

*/
