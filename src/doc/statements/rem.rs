/*!
# `REM <anything>`
Also `' <anything>`.

## Purpose
A remark. The rest of the line is ignored.

*/
