/*!
# `LIST`

## Purpose
Prints the program in line number order.

*/
