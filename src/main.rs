use io::Write;
use std::{
    fs,
    io::{self, Read},
    time::Instant,
};

use aliasdsl::{
    frontend::{parse, tokenize},
    DslError,
};
use clap::{Arg, ArgMatches, Command};

fn main() {
    env_logger::init();

    let matches = Command::new("aliasdsl")
        .version("1.0.0")
        .author("David Voigt <david.voigt1998@gmail.com>\nLars Vogtmann")
        .about("Tokenizer and parser for alias declarations of the form `alias <name> #<n> <packed>(\"<string>\")`.")
        .arg(Arg::new("compile")
            .value_name("FILE")
            .short('c')
            .long("compile")
            .help("Path to the source file that will be parsed.")
            .takes_value(true))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("Output tokens as well as the AST. Useful for debugging.")
            .takes_value(false))
        .get_matches();

    match matches.value_of("compile") {
        Some(path) => Runner::run_with_mode(RunMode::File, &matches)
            .unwrap_or_else(|err| eprintln!("{}: {}", err, path)),
        None => Runner::run_with_mode(RunMode::Prompt, &matches)
            .unwrap_or_else(|err| eprintln!("{}", err)),
    };
}

/// Indicate whether the parser shall be run in REPL/prompt mode or
/// on a source file.
enum RunMode {
    Prompt,
    File,
}

/// Simple struct responsible for coordinating either the REPL or a single file run.
struct Runner<'a> {
    args: &'a ArgMatches,
}

impl<'a> Runner<'a> {
    pub fn run_with_mode(mode: RunMode, args: &'a ArgMatches) -> Result<(), DslError> {
        let runner = Self { args };
        match mode {
            RunMode::File => {
                let src = runner.load_source_file()?;
                runner.run(&src);
            }
            RunMode::Prompt => runner.run_prompt()?,
        }
        Ok(())
    }

    /// Helper function for getting the content of a file.
    fn load_source_file(&self) -> Result<String, DslError> {
        let path = self.args.value_of("compile").unwrap_or_default();
        let mut file = fs::File::open(path)?;
        let mut src = String::new();
        file.read_to_string(&mut src)?;
        Ok(src)
    }

    /// Starts a REPL like prompt used for entering single statements.
    fn run_prompt(&self) -> Result<(), DslError> {
        let mut inpt = String::new();
        println!("aliasdsl 1.0.0\nPress ctrl+d or ctrl+c to exit.");
        loop {
            print!("\u{1b}[0;38;5;171m> \u{1b}[0m");
            io::stdout().flush()?;
            let num_bytes = io::stdin().read_line(&mut inpt)?;
            if num_bytes == 0 {
                // Terminate line
                println!();
                return Ok(());
            }
            self.run(inpt.trim_end());
            inpt.clear();
        }
    }

    /// Tokenizes and parses a source string and prints the resulting program.
    pub fn run(&self, src: &str) {
        let start = Instant::now();
        let tokens = tokenize(src);
        if self.args.is_present("verbose") {
            println!("Tokens:");
            tokens.iter().for_each(|token| println!("\t{}", token));
        }
        match parse(tokens) {
            Err(e) => eprintln!("{}", e),
            Ok(program) => {
                if self.args.is_present("verbose") {
                    println!("AST:");
                    println!("\t{:?}", program);
                }
                println!("{}", program);
                println!("\ntook \u{1b}[32;40m{:.2?}\u{1b}[0m", start.elapsed());
            }
        }
    }
}
