/*!
# `DEF FN<name>(<parameters>) = <expression>`

## Purpose
Defines a function usable in any later expression.

## Remarks
The definition happens when the `DEF` line executes, so run it before
calling the function. Parameters are local to the body; every other
name in the body refers to the program's variables at call time.
Function names ignore case. A function that keeps calling itself is
stopped with `ILLEGAL FUNCTION CALL`.

## Example
```text
10 DEF FNSQ(X) = X * X
20 DEF FN HYP(A, B) = SQR(FNSQ(A) + FNSQ(B))
30 PRINT FNHYP(3, 4)
RUN
5
```
*/
