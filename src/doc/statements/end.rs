/*!
# `END`

## Purpose
Stops the program without a message.

## Example
```text
10 PRINT "DONE"
20 END
30 PRINT "NOT REACHED"
```

*/
