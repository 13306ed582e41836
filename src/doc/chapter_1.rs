/*!
# Expressions and Types

There are two kinds of values you can store: numbers and strings.
Comparisons produce a third kind, a truth value, which prints as
`TRUE` or `FALSE`.

Numbers are 64-bit floating point. Whole numbers print without a
decimal point.
```text
PRINT 7/2, 8/2
3.5	4
```

Variable names start with a letter and continue with letters, digits
or underscores. Names are case sensitive, so `A` and `a` are two
different variables. A name ending in `$` only ever holds a string.
```text
LET NAME$ = "ADA"
COUNT = 3
```

Using a variable that was never assigned is an error.
```text
PRINT NOPE
?UNDEFINED VARIABLE; NOPE
```

Strings are written in double quotes. Adding two strings joins them.
Mixing a string and a number in arithmetic is a `TYPE MISMATCH`.
```text
PRINT "AB" + "CD"
ABCD
```

## Operators

From lowest to highest precedence.

| Operator | Meaning |
|----------|---------|
| `OR` | True when either side is true. |
| `AND` | True when both sides are true. |
| `NOT` | Logical negation. |
| `=` `<>` `<` `<=` `>` `>=` | Comparison of two numbers or two strings. |
| `+` `-` | Addition, string joining and subtraction. |
| `*` `/` `MOD` | Multiplication, division and modulus. |
| `-` | Unary minus. |
| `^` | Exponentiation. |

Operators of the same precedence group left to right, so `8-3-2` is 3.
`AND` and `OR` stop evaluating as soon as the answer is known.
Numbers used as truth values are true when they are not zero.

`MOD` takes the sign of the divisor: `-7 MOD 3` is 2. Dividing by zero
and `MOD` by zero are both `DIVISION BY ZERO`. Results that are not
finite numbers are errors rather than values.
*/
