/*!
# `RETURN`
Also see `GOSUB`.

## Purpose
Returns from a subroutine to the line after the most recent `GOSUB`.

## Remarks
`RETURN` without a `GOSUB` is an error and execution carries on.

*/
