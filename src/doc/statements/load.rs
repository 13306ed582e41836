/*!
# `LOAD <filename>`

## Purpose
Replaces the program with one read from a file or URL.

## Remarks
The quotes around the name are optional. Variables are cleared. If
the file can't be read, or any line in it lacks a line number, the
current program is left alone.

## Example
```text
LOAD "games/hammurabi.bas"
LOAD https://example.com/star.bas
```

*/
