/*!
# `RESTORE`

## Purpose
Makes the next `READ` start over at the first `DATA` item.

*/
