/*!
# `INPUT ["<prompt>";] <variable>`

## Purpose
Asks the operator for a value.

## Remarks
Without a prompt the question is `Enter value for <variable>: `.
A string variable takes the reply as typed. Anything else evaluates
the reply as an expression, so `2*3` stores 6. When input runs out
the program stops.

## Example
```text
10 INPUT "AGE"; AGE
20 INPUT NAME$
```

*/
