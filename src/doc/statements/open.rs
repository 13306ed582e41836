/*!
# `OPEN <filename> FOR INPUT|OUTPUT AS [#]<number>`
Also `PRINT #<number>, <list>` and `CLOSE [#]<number>`.

## Purpose
Writes text files from a program.

## Remarks
`PRINT #` takes the same list as `PRINT`. Using a number that isn't
open is `BAD FILE NUMBER`. `RUN` and `NEW` close every file.

## Example
```text
10 OPEN "out.txt" FOR OUTPUT AS #1
20 PRINT #1, "HELLO"
30 CLOSE #1
```

*/
