/*!
# Introductory Tutorial

Start the `basic` executable from a terminal. When it is ready for
you it says so.
<pre><code>&nbsp;  LINE BASIC 0.1.0
&nbsp;  READY.
&nbsp;> █
</code></pre>

Type CTRL-D to exit, or enter `QUIT`. Stop a running program with CTRL-C.

Anything typed without a line number runs right away. This is
called direct mode.
```text
PRINT 2 + 2
4
READY.
```

Typing a line number first stores the line in the program instead.
Lines are kept in numeric order no matter what order you type them.
Typing an existing number replaces that line, and typing only the
number deletes it.
```text
20 PRINT "WORLD"
10 PRINT "HELLO"
LIST
10 PRINT "HELLO"
20 PRINT "WORLD"
RUN
HELLO
WORLD
READY.
```

Each line holds exactly one statement. Execution starts at the lowest
line and moves to the next higher line until the program runs out of
lines or reaches `END`. `GOTO`, `GOSUB`, `RETURN`, `NEXT` and `IF`
move execution elsewhere.

When something goes wrong the interpreter prints the problem with a
leading question mark and the line it happened in. The program keeps
going with the next line.
```text
10 PRINT 1/0
20 PRINT "STILL HERE"
RUN
?DIVISION BY ZERO IN 10
STILL HERE
```

Save your work with `SAVE "name.bas"` and bring it back with
`LOAD "name.bas"`. `LOAD` also accepts an `http://` or `https://` URL.
*/
