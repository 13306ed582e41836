/*!
# `RUN`

## Purpose
Starts the program from its first line.

## Remarks
Variables, functions, loops, subroutine returns and open files are
cleared first. `DATA` starts over.

*/
