/*!
# Functions

Builtin function names ignore case. Calling one with the wrong number
of arguments is `WRONG NUMBER OF ARGUMENTS`. Functions without
arguments are used without parentheses, as in `PRINT PI`.
*/

pub mod ABS {
    /*!
    ## `ABS(X)` Returns the absolute value of X.
    ```text
    PRINT ABS(-0.5)
    0.5
    ```
    */
}

pub mod ASC {
    /*!
    ## `ASC(X$)` Returns the unicode value of the first character of X$. An empty string is an `ILLEGAL FUNCTION CALL`.
    ```text
    PRINT ASC("A")
    65
    ```
    */
}

pub mod CEIL {
    /*!
    ## `CEIL(X)` Returns the smallest whole number not less than X.
    ```text
    PRINT CEIL(1.2)
    2
    ```
    */
}

pub mod CHR {
    /*!
    ## `CHR$(X)` Returns the one character string for unicode value X.
    ```text
    PRINT CHR$(65)
    A
    ```
    */
}

pub mod COS {
    /*!
    ## `COS(X)` Returns the cosine of X radians.
    ```text
    PRINT COS(0)
    1
    ```
    */
}

pub mod DATE {
    /*!
    ## `DATE$` Returns today's date as `YYYY-MM-DD`.
    */
}

pub mod DEGREES {
    /*!
    ## `DEGREES(X)` Converts X radians to degrees.
    ```text
    PRINT DEGREES(PI)
    180
    ```
    */
}

pub mod EXP {
    /*!
    ## `EXP(X)` Returns e raised to X.
    */
}

pub mod FLOOR {
    /*!
    ## `FLOOR(X)` Returns the largest whole number not greater than X. Same as `INT`.
    ```text
    PRINT FLOOR(-1.5)
    -2
    ```
    */
}

pub mod INT {
    /*!
    ## `INT(X)` Returns the largest whole number not greater than X.
    ```text
    PRINT INT(2.7)
    2
    ```
    */
}

pub mod LEFT {
    /*!
    ## `LEFT$(X$, N)` Returns the first N characters of X$.
    ```text
    PRINT LEFT$("BASIC", 2)
    BA
    ```
    */
}

pub mod LEN {
    /*!
    ## `LEN(X$)` Returns the number of characters in X$.
    ```text
    PRINT LEN("BASIC")
    5
    ```
    */
}

pub mod LOG {
    /*!
    ## `LOG(X)` Returns the natural logarithm of X. X must be positive.
    */
}

pub mod MID {
    /*!
    ## `MID$(X$, S [, N])` Returns N characters of X$ starting at position S, where 1 is the first character. Without N, returns everything from S on.
    ```text
    PRINT MID$("BASIC", 2, 3)
    ASI
    ```
    */
}

pub mod PI {
    /*!
    ## `PI` The ratio of a circle's circumference to its diameter.
    */
}

pub mod RADIANS {
    /*!
    ## `RADIANS(X)` Converts X degrees to radians.
    */
}

pub mod RIGHT {
    /*!
    ## `RIGHT$(X$, N)` Returns the last N characters of X$.
    ```text
    PRINT RIGHT$("BASIC", 2)
    IC
    ```
    */
}

pub mod RND {
    /*!
    ## `RND[(X)]` Returns a random number from 0 up to but not including 1. X is ignored. Start the interpreter with `--seed` to get the same numbers every run.
    */
}

pub mod ROUND {
    /*!
    ## `ROUND(X [, D])` Rounds X to D decimal places, halves away from zero.
    ```text
    PRINT ROUND(2.5), ROUND(3.14159, 2)
    3	3.14
    ```
    */
}

pub mod SIN {
    /*!
    ## `SIN(X)` Returns the sine of X radians.
    */
}

pub mod SQR {
    /*!
    ## `SQR(X)` Returns the square root of X. `SQRT` is the same function.
    ```text
    PRINT SQR(16)
    4
    ```
    */
}

pub mod STR {
    /*!
    ## `STR$(X)` Returns X as a string. Numbers that aren't negative get a leading space.
    ```text
    PRINT "["; STR$(5); "]"
    [ 5]
    ```
    */
}

pub mod TAN {
    /*!
    ## `TAN(X)` Returns the tangent of X radians.
    */
}

pub mod TIME {
    /*!
    ## `TIME$` Returns the time of day as `HH:MM:SS`.
    */
}

pub mod TRIM {
    /*!
    ## `TRIM$(X$)` Returns X$ without leading and trailing whitespace.
    */
}

pub mod VAL {
    /*!
    ## `VAL(X$)` Returns the number at the start of X$, or 0 when there isn't one.
    ```text
    PRINT VAL("12ABC")
    12
    ```
    */
}
