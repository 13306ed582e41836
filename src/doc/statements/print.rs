/*!
# `PRINT [<list of expressions>]`

## Purpose
Outputs values to the terminal.

## Remarks
A `PRINT` by itself outputs a newline. Ending the list with a
semicolon or comma suppresses the newline. A semicolon puts nothing
between values and a comma puts a tab.

## Example
```text
PRINT "A"; 1, "B"
A1	B
```

*/
