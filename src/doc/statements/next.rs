/*!
# `NEXT [<variable>]`
Also see `FOR`.

## Purpose
Marks the end of a `FOR` loop.

## Remarks
`NEXT` closes the innermost open loop. The variable name is
accepted and ignored unless the interpreter was started with
`--strict-next`, where `NEXT I` closes the loop over `I` and discards
any loops opened inside it.

## Example
```text
10 FOR I = 1 TO 2
20 FOR J = 1 TO 2
30 PRINT I; J; " ";
40 NEXT J
50 NEXT I
RUN
11 12 21 22
```

*/
