// exprc: command-line front-end for a minimal arithmetic expression language

mod diagnostics;
mod eval;
mod parser;

use clap::{Arg, ArgAction, Command};

use parser::lexer::Lexer;
use parser::parse::Parser;

fn main() {
    let matches = Command::new("exprc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse and evaluate arithmetic expressions")
        .arg_required_else_help(true)
        .arg(
            Arg::new("expression")
                .help("The expression to evaluate, e.g. '1+2*3'")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the token stream instead of evaluating")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ast")
                .long("ast")
                .help("Print the syntax tree instead of evaluating")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let source = matches
        .get_one::<String>("expression")
        .expect("expression is required");

    if matches.get_flag("tokens") {
        print_tokens(source);
        return;
    }

    let mut parser = match Parser::new(source) {
        Ok(parser) => parser,
        Err(e) => fail(source, e.span.start, &e.message),
    };

    let tree = match parser.parse() {
        Ok(tree) => tree,
        Err(e) => fail(source, e.span.start, &e.message),
    };

    if matches.get_flag("ast") {
        println!("{}", tree);
        return;
    }

    match eval::eval(&tree) {
        Ok(value) => println!("{}", value),
        Err(e) => fail(source, e.span().start, &e.to_string()),
    }
}

/// Print one token per line with its byte range.
fn print_tokens(source: &str) {
    let mut lexer = Lexer::new(source);
    let tokens = match lexer.tokenize() {
        Ok(tokens) => tokens,
        Err(e) => fail(source, e.span.start, &e.message),
    };

    for token in &tokens {
        let span = token.span();
        println!("{:>4}..{:<4} {}", span.start, span.end(), token);
    }
}

/// Report a caret diagnostic on stderr and exit with a failing status.
fn fail(source: &str, offset: usize, message: &str) -> ! {
    eprintln!("{}", diagnostics::render(source, offset, message));
    std::process::exit(1);
}
