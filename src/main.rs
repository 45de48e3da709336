use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process,
    time::Instant,
};

use clap::Parser;
use funlang::{
    display_error,
    lexer::lexer::tokenize,
    parser::parser::{parse_with_config, ParserConfig, TrailingIdentifier},
};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum TrailingIdentifierArg {
    Discard,
    Reject,
}

impl From<TrailingIdentifierArg> for TrailingIdentifier {
    fn from(arg: TrailingIdentifierArg) -> Self {
        match arg {
            TrailingIdentifierArg::Discard => TrailingIdentifier::Discard,
            TrailingIdentifierArg::Reject => TrailingIdentifier::Reject,
        }
    }
}

#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Parse a funlang expression and print its syntax tree")]
struct Args {
    /// Source file; stdin is read when neither a file nor --expr is given
    input: Option<PathBuf>,

    /// Parse this expression instead of a file
    #[clap(short, long, conflicts_with = "input")]
    expr: Option<String>,

    /// Print the token stream before the tree
    #[clap(long)]
    tokens: bool,

    /// What to do with a bare identifier after a call's callee
    #[clap(long, value_enum, default_value = "discard")]
    trailing_identifier: TrailingIdentifierArg,

    /// Deepest nesting of sub-expressions accepted before giving up
    #[clap(long, default_value_t = ParserConfig::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print phase timings
    #[clap(short, long)]
    verbose: bool,
}

fn read_source(args: &Args) -> io::Result<(String, Option<String>)> {
    if let Some(expr) = &args.expr {
        return Ok((expr.clone(), None));
    }

    match &args.input {
        Some(path) => {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
            Ok((read_to_string(path)?, file_name))
        }
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok((source, None))
        }
    }
}

fn main() {
    let args = Args::parse();

    let (source, file_name) = match read_source(&args) {
        Ok(input) => input,
        Err(error) => {
            eprintln!("Failed to read input: {}", error);
            process::exit(2);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), file_name) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            process::exit(1);
        }
    };

    if args.verbose {
        println!("Tokenized in {:?}", start.elapsed());
    }

    if args.tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let config = ParserConfig {
        trailing_identifier: args.trailing_identifier.into(),
        max_depth: args.max_depth,
    };

    let ast = match parse_with_config(tokens, config) {
        Ok(ast) => ast,
        Err(error) => {
            display_error(&error, &source);
            process::exit(1);
        }
    };

    if args.verbose {
        println!("Parsed in {:?}", parse_start.elapsed());
        println!("Total time: {:?}", start.elapsed());
    }

    println!("{}", ast);
}
