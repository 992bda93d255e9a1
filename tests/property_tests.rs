//! Property-based tests for the lexer and parser
//!
//! These cover the properties that hold for whole families of inputs: the
//! lexer accepts every sequence of valid lexemes, number tokens reproduce
//! their source text exactly, and whitespace never changes the parse.

use exprc::eval::eval;
use exprc::parser::lexer::{Lexer, Token};
use exprc::parser::parse::Parser;
use proptest::prelude::*;

/// Generate one valid lexeme of the expression language.
fn lexeme_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,6}",
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just("<".to_string()),
        Just(">".to_string()),
        Just("==".to_string()),
        Just("!=".to_string()),
        Just("<=".to_string()),
        Just(">=".to_string()),
    ]
}

fn tree_of(source: &str) -> String {
    let mut parser = Parser::new(source).expect("lexing failed");
    parser.parse().expect("parsing failed").to_string()
}

proptest! {
    /// The lexer accepts any whitespace-separated sequence of valid lexemes,
    /// however grammatically nonsensical, and always terminates the stream
    /// with exactly one end-of-input token.
    #[test]
    fn lexer_is_total_over_valid_lexemes(
        lexemes in prop::collection::vec(lexeme_strategy(), 0..32)
    ) {
        let input = lexemes.join(" ");
        let mut lexer = Lexer::new(&input);
        let tokens = lexer.tokenize().expect("valid lexemes must tokenize");

        prop_assert_eq!(tokens.len(), lexemes.len() + 1);
        prop_assert!(matches!(tokens.last(), Some(Token::Eof(_))));
    }

    /// A digit run lexes to a single number token whose value is the base-10
    /// value of the run and whose span covers every digit.
    #[test]
    fn digit_runs_round_trip(text in "[0-9]{1,18}") {
        let expected: i64 = text.parse().expect("generated digits fit in i64");

        let mut lexer = Lexer::new(&text);
        let tokens = lexer.tokenize().expect("digit runs always tokenize");

        prop_assert_eq!(tokens.len(), 2);
        match tokens[0] {
            Token::Num(value, span) => {
                prop_assert_eq!(value, expected);
                prop_assert_eq!(span.start, 0);
                prop_assert_eq!(span.len, text.len());
            }
            ref other => prop_assert!(false, "expected a number token, got {:?}", other),
        }
    }

    /// Surrounding lexemes with extra whitespace never changes the tree.
    #[test]
    fn whitespace_does_not_change_the_tree(
        a in 0i64..1000, b in 0i64..1000, c in 0i64..1000
    ) {
        let dense = format!("{}+{}*{}", a, b, c);
        let spaced = format!("  {} +\t{} * {}  ", a, b, c);

        prop_assert_eq!(tree_of(&dense), tree_of(&spaced));
    }

    /// Evaluation agrees with native arithmetic once precedence is applied.
    #[test]
    fn precedence_matches_native_arithmetic(
        a in -999i64..1000, b in -999i64..1000, c in -999i64..1000
    ) {
        let source = format!("{}+{}*{}", a, b, c);
        let mut parser = Parser::new(&source).expect("lexing failed");
        let tree = parser.parse().expect("parsing failed");

        prop_assert_eq!(eval(&tree).expect("small operands cannot overflow"), a + b * c);
    }
}
