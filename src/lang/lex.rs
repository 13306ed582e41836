use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        loop {
            self.chars().next();
            len += 1;
            if let Some(pk) = self.chars().peek() {
                if is_basic_whitespace(*pk) {
                    continue;
                }
            }
            return Some(Token::Whitespace(len));
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        let mut decimal = false;
        let mut exp = false;
        loop {
            let mut ch = match self.chars().next() {
                Some(c) => c,
                None => {
                    debug_assert!(false, "Failed to tokenize number.");
                    return None;
                }
            };
            if ch == 'e' {
                ch = 'E'
            }
            s.push(ch);
            if ch == '.' {
                decimal = true
            }
            if let Some(pk) = self.chars().peek() {
                if ch == 'E' {
                    exp = true;
                    if *pk == '+' || *pk == '-' {
                        continue;
                    }
                }
                if is_basic_digit(*pk) {
                    continue;
                }
                if !decimal && !exp && *pk == '.' {
                    continue;
                }
                if !exp && (*pk == 'E' || *pk == 'e') {
                    continue;
                }
            }
            break;
        }
        Some(Token::Literal(Literal::Number(s)))
    }

    fn string(&mut self) -> Option<Token> {
        let mut s = String::new();
        self.chars().next();
        loop {
            if let Some(ch) = self.chars().next() {
                if ch != '"' {
                    s.push(ch);
                    continue;
                }
            }
            return Some(Token::Literal(Literal::String(s)));
        }
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        loop {
            let ch = match self.chars().next() {
                Some(ch) => ch,
                None => {
                    debug_assert!(false, "Failed to tokenize alphabetic.");
                    return None;
                }
            };
            s.push(ch);
            if ch == '$' {
                break;
            }
            if let Some(pk) = self.chars().peek() {
                if is_basic_alphabetic(*pk) || is_basic_digit(*pk) || *pk == '_' || *pk == '$' {
                    continue;
                }
            }
            break;
        }
        if let Some(token) = Token::from_string(&s) {
            return Some(token);
        }
        Some(Token::Ident(Ident::new(&s)))
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        match ch {
            '(' => return Some(Token::LParen),
            ')' => return Some(Token::RParen),
            ',' => return Some(Token::Comma),
            ';' => return Some(Token::Semicolon),
            '#' => return Some(Token::Hash),
            _ => {}
        }
        if let Some(pk) = self.chars().peek() {
            let pair: String = [ch, *pk].iter().collect();
            if let Some(t) = Token::from_string(&pair) {
                self.chars().next();
                return Some(t);
            }
        }
        match Token::from_string(&ch.to_string()) {
            Some(t) => Some(t),
            None => Some(Token::Unknown(ch.to_string())),
        }
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    raw: bool,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = *self.chars.peek()?;
        if self.raw {
            let rest = self.chars.by_ref().collect::<String>();
            return Some(Token::Raw(rest.trim().to_string()));
        }
        let token = if is_basic_whitespace(pk) {
            self.whitespace()
        } else if is_basic_digit(pk) || pk == '.' {
            self.number()
        } else if is_basic_alphabetic(pk) {
            self.alphabetic()
        } else if pk == '"' {
            self.string()
        } else {
            self.minutia()
        };
        if let Some(Token::Word(word)) = &token {
            if word.takes_raw_text() {
                self.raw = true;
            }
        }
        token
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> Vec<Token> {
        let s = s.trim_end_matches(|c| c == '\n' || c == '\r');
        let mut tokens = BasicLexer {
            chars: s.chars().peekable(),
            raw: false,
        }
        .collect();
        BasicLexer::trim_end(&mut tokens);
        BasicLexer::collapse_go(&mut tokens);
        tokens
    }

    fn collapse_go(tokens: &mut Vec<Token>) {
        let mut locs: Vec<(usize, Token)> = vec![];
        for (index, ttt) in tokens.windows(3).enumerate() {
            if let Token::Ident(go) = &ttt[0] {
                if go.name().eq_ignore_ascii_case("GO") {
                    if let Token::Whitespace(_) = ttt[1] {
                        if let Token::Word(Word::To) = ttt[2] {
                            locs.push((index, Token::Word(Word::Goto)));
                        }
                        if let Token::Ident(sub) = &ttt[2] {
                            if sub.name().eq_ignore_ascii_case("SUB") {
                                locs.push((index, Token::Word(Word::Gosub)));
                            }
                        }
                    }
                }
            }
        }
        while let Some((index, token)) = locs.pop() {
            tokens.splice(index..index + 3, Some(token));
        }
    }

    fn trim_end(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.last() {
            tokens.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_and_idents_keep_case() {
        let mut x = lex("print Total$").into_iter();
        assert_eq!(x.next(), Some(Token::Word(Word::Print1)));
        assert_eq!(x.next(), Some(Token::Whitespace(1)));
        assert_eq!(
            x.next(),
            Some(Token::Ident(Ident::String("Total$".into())))
        );
        assert_eq!(x.next(), None);
    }

    #[test]
    fn test_rem_is_raw() {
        let v = lex("REM  this is: \"anything\"");
        assert_eq!(
            v,
            vec![
                Token::Word(Word::Rem1),
                Token::Raw("this is: \"anything\"".to_string())
            ]
        );
    }

    #[test]
    fn test_comparisons() {
        let v: Vec<Token> = lex("1<=2<>3==4!=5>=6")
            .into_iter()
            .filter(|t| matches!(t, Token::Operator(_)))
            .collect();
        assert_eq!(
            v,
            vec![
                Token::Operator(Operator::LessEqual),
                Token::Operator(Operator::NotEqual),
                Token::Operator(Operator::EqualEqual),
                Token::Operator(Operator::BangEqual),
                Token::Operator(Operator::GreaterEqual),
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            lex("1.5E+3"),
            vec![Token::Literal(Literal::Number("1.5E+3".to_string()))]
        );
        assert_eq!(
            lex(".25"),
            vec![Token::Literal(Literal::Number(".25".to_string()))]
        );
    }

    #[test]
    fn test_go_to() {
        assert_eq!(lex("go to"), vec![Token::Word(Word::Goto)]);
        assert_eq!(lex("GO SUB"), vec![Token::Word(Word::Gosub)]);
    }

    #[test]
    fn test_print_hash() {
        let v = lex("PRINT#1, X");
        assert_eq!(v[0], Token::Word(Word::Print1));
        assert_eq!(v[1], Token::Hash);
        assert_eq!(v[2], Token::Literal(Literal::Number("1".to_string())));
        assert_eq!(v[3], Token::Comma);
    }
}
