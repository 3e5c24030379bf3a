extern crate liner;
extern crate scalc;

use std::fmt;
use std::io::{self, stdout, BufRead, Write};
use std::process::exit;

use clap::{App, Arg};
use liner::Context;

use scalc::{eval, CalcError};

const PROMPT: &'static str = "[]> ";

pub enum RuntimeError {
    Calc(CalcError),
    IO(io::Error),
}

impl From<CalcError> for RuntimeError {
    fn from(data: CalcError) -> RuntimeError {
        RuntimeError::Calc(data)
    }
}

impl From<io::Error> for RuntimeError {
    fn from(data: io::Error) -> RuntimeError {
        RuntimeError::IO(data)
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RuntimeError::Calc(ref c) => write!(f, "scalc: {}", c),
            RuntimeError::IO(ref e) => write!(f, "scalc: {}", e),
        }
    }
}

fn calc(args: Vec<String>) -> Result<(), RuntimeError> {
    let stdout = stdout();
    let mut stdout = stdout.lock();

    if !args.is_empty() {
        writeln!(stdout, "{}", eval(&args.join(" "))?)?;
    } else if !atty::is(atty::Stream::Stdin) {
        // Expressions are being piped in, one per line
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            match line.trim() {
                "" => (),
                s => writeln!(stdout, "{}", eval(s)?)?,
            }
        }
    } else {
        let mut con = Context::new();
        loop {
            let line = con.read_line(PROMPT, &mut |_| {})?;
            match line.trim() {
                "" => (),
                "exit" => break,
                s => {
                    match eval(s) {
                        Ok(value) => writeln!(stdout, "{}", value)?,
                        Err(e) => {
                            writeln!(stdout, "{}", RuntimeError::Calc(e))?
                        }
                    }
                }
            }
            con.history.push(line.into())?;
        }
    }
    Ok(())
}

fn main() {
    let matches = App::new("scalc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Evaluates arithmetic expressions")
        .arg(
            Arg::with_name("expr")
                .help("Expression to evaluate; with none, reads stdin")
                .multiple(true),
        )
        .get_matches();

    let args = matches
        .values_of("expr")
        .map(|values| values.map(String::from).collect())
        .unwrap_or_else(Vec::new);

    let code = match calc(args) {
        Ok(()) => 0,
        Err(e) => {
            println!("{}", e);
            1
        }
    };
    exit(code)
}
