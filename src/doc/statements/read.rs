/*!
# `READ <variable>[,<variable>...]`
Also see `DATA` and `RESTORE`.

## Purpose
Assigns the next `DATA` items to variables.

## Example
```text
10 DATA 1, 2
20 READ A, B
30 PRINT A + B
RUN
3
```

*/
