use kempe_common::message::Span;
use logos::Logos;

#[derive(Logos, Clone, Copy, Debug, Eq, PartialEq)]
enum Token<'src> {
    #[regex(r"[^ \t\r\n\x0B\x0C]+")]
    Word(&'src str),

    #[token("\n")]
    Newline,

    #[error]
    #[regex(r"[ \t\r\x0B\x0C]+", logos::skip)]
    Error,
}

/// What a line is made of.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lexeme<'src> {
    Word(&'src str),
    Newline,
}

/// Lex the whole source, pairing every lexeme with its location.
pub fn lex(source: &str) -> Vec<(Lexeme, Span)> {
    let mut lexer = Token::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(token) = lexer.next() {
        let span = Span::from(lexer.span());
        let lexeme = match token {
            Token::Word(word) => Lexeme::Word(word),
            Token::Newline => Lexeme::Newline,
            // Every byte is whitespace or part of a word, so whatever the
            // lexer rejects is still kept as text.
            Token::Error => Lexeme::Word(lexer.slice()),
        };

        lexemes.push((lexeme, span));
    }

    lexemes
}

#[cfg(test)]
mod tests {
    use super::{lex, Lexeme};

    fn kinds(source: &str) -> Vec<Lexeme> {
        lex(source).into_iter().map(|(lexeme, _)| lexeme).collect()
    }

    #[test]
    fn lex_words_and_lines() {
        let expected = vec![
            Lexeme::Word("3"),
            Lexeme::Newline,
            Lexeme::Word("a"),
            Lexeme::Word("b"),
            Lexeme::Newline,
        ];

        assert_eq!(expected, kinds("3\r\na \t b\n"));
    }

    #[test]
    fn lex_vertical_tab_and_form_feed_are_whitespace() {
        assert_eq!(
            vec![Lexeme::Word("a"), Lexeme::Word("b"), Lexeme::Word("c")],
            kinds("a\x0Bb\x0C c")
        );
    }

    #[test]
    fn lex_any_non_whitespace_is_a_word() {
        assert_eq!(vec![Lexeme::Word("%v1.x"), Lexeme::Word("y'")], kinds("%v1.x  y'"));
    }

    #[test]
    fn lex_spans() {
        let spans: Vec<_> = lex("2\nab c").into_iter().map(|(_, span)| span).collect();
        let spans: Vec<_> = spans.into_iter().map(|span| (span.start, span.end)).collect();
        assert_eq!(vec![(0, 1), (1, 2), (2, 4), (5, 6)], spans);
    }
}
