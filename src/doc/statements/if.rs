/*!
# `IF <expression> THEN <statement> [ELSE <statement>]`
Also `IF <expression> GOTO <line>`.

## Purpose
Runs a statement only when a condition holds.

## Remarks
A line number alone after `THEN` or `ELSE` means `GOTO` that line.
Any number other than zero counts as true.

## Example
```text
10 A = 10
20 IF A < 30 THEN PRINT A ELSE END
30 A = A + 10
40 GOTO 20
RUN
10
20
```

*/
