/*!
# `STOP`

## Purpose
Stops the program and says where.

## Example
```text
10 PRINT 1
20 STOP
RUN
1
BREAK IN 20
```

*/
