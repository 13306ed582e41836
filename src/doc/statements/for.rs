/*!
# `FOR <variable> = x TO y [STEP z]`

## Purpose
Used with `NEXT` to repeat the lines between them while counting.

## Remarks
The variable gets x, then the loop body runs. Each `NEXT` adds z
(default 1) and jumps back to the line after the `FOR` while the
variable has not passed y. With a negative step the loop counts down.
The body always runs at least once, even when x is already past y.

Starting a loop over a variable that already has an open loop
discards that loop and any loops opened inside it.

## Example
```text
10 FOR I = 3 TO 1 STEP -1
20 PRINT I;
30 NEXT I
RUN
321
```

*/
