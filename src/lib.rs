pub mod complex;
pub mod error;
pub mod eval;
pub mod everyday;
pub mod finance;
pub mod matrix;
pub mod numeric;
pub mod parse;
pub mod radix;
pub mod stats;
pub mod token;
pub mod units;

pub use crate::error::CalcError;
pub use crate::eval::{Bindings, DefaultEnvironment, Environment};
pub use crate::matrix::Matrix;
pub use crate::parse::Expr;

/// Two independently edited operands feeding binary operations. Each
/// slot owns its value; operations read the slots and never mutate
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct OperandPair<T> {
    pub a: T,
    pub b: T,
}

impl<T> OperandPair<T> {
    pub fn new(a: T, b: T) -> Self {
        OperandPair { a, b }
    }
}

/// Tokenize and parse an expression for repeated evaluation, the way
/// the plotting and integration surfaces use one expression at many
/// points.
pub fn compile(input: &str) -> Result<Expr, CalcError> {
    token::tokenize(input).and_then(|tokens| parse::parse(&tokens))
}

/// Evaluate a closed expression against the default environment.
pub fn eval(input: &str) -> Result<f64, CalcError> {
    eval_with_bindings(input, &Bindings::new())
}

/// Evaluate an expression with free variables bound by name.
pub fn eval_with_bindings(
    input: &str,
    bindings: &Bindings,
) -> Result<f64, CalcError> {
    let expr = compile(input)?;
    eval::evaluate(&expr, bindings, &mut DefaultEnvironment)
}

/// Evaluate against a caller-supplied environment.
pub fn eval_with_env<E>(input: &str, env: &mut E) -> Result<f64, CalcError>
    where E: Environment
{
    let expr = compile(input)?;
    eval::evaluate(&expr, &Bindings::new(), env)
}
