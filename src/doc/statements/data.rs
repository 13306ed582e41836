/*!
# `DATA <literal>[,<literal>...]`

## Purpose
Lists constants for `READ` to pick up one at a time.

## Remarks
All `DATA` lines in the program form one sequence in line order,
no matter where they sit or whether execution ever reaches them.
Quoted items are strings. Unquoted items are numbers when they look
like numbers and strings otherwise. Reading past the last item is
`OUT OF DATA`.

## Example
```text
10 READ A$, N
20 PRINT A$; N
30 DATA "NUGGET", 3
RUN
NUGGET3
```

*/
