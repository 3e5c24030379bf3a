use std::collections::HashMap;
use std::f64;

use crate::error::{CalcError, PartialComp};
use crate::parse::{BinOp, Expr};

/// Variable bindings for one evaluation: name to value.
pub type Bindings = HashMap<String, f64>;

/// Represents an environment for evaluating a mathematical expression
pub trait Environment {
    /// Look up the arity of an atom:
    /// - Constants have an implicit arity of zero
    /// - This library currently does not support variadic functions
    /// - If a symbol is not defined, return None
    fn arity(&self, atom: &str) -> Option<usize>;

    /// Resolve an atom given the name of the atom and some number of
    /// arguments
    /// Precondition: `args.len() == self.arity(atom)`
    fn resolve(
        &mut self,
        atom: &str,
        args: &[f64],
    ) -> Result<f64, CalcError>;
}

pub struct DefaultEnvironment;

impl Environment for DefaultEnvironment {
    fn arity(&self, atom: &str) -> Option<usize> {
        match atom {
            "pi" | "π" | "e" | "tau" | "rand" => Some(0),
            "sqrt" | "sin" | "cos" | "tan" | "log" | "ln" | "exp" |
            "abs" | "factorial" => Some(1),
            "pow" => Some(2),
            _ => None,
        }
    }

    fn resolve(
        &mut self,
        atom: &str,
        args: &[f64],
    ) -> Result<f64, CalcError> {
        match atom {
            "pi" | "π" => Ok(f64::consts::PI),
            "e" => Ok(f64::consts::E),
            "tau" => Ok(f64::consts::PI * 2.0),
            "rand" => Ok(rand::random::<f64>()),
            "sqrt" => {
                if args[0] < 0.0 {
                    Err(CalcError::OutOfDomain(
                        PartialComp::unary("sqrt", args[0]),
                    ))
                } else {
                    Ok(args[0].sqrt())
                }
            }
            "sin" => Ok(args[0].sin()),
            "cos" => Ok(args[0].cos()),
            "tan" => Ok(args[0].tan()),
            "log" => {
                if args[0] <= 0.0 {
                    Err(CalcError::OutOfDomain(
                        PartialComp::unary("log", args[0]),
                    ))
                } else {
                    Ok(args[0].log10())
                }
            }
            "ln" => {
                if args[0] <= 0.0 {
                    Err(CalcError::OutOfDomain(
                        PartialComp::unary("ln", args[0]),
                    ))
                } else {
                    Ok(args[0].ln())
                }
            }
            "exp" => Ok(args[0].exp()),
            "abs" => Ok(args[0].abs()),
            "factorial" => factorial(args[0]),
            "pow" => pow(args[0], args[1], "pow"),
            _ => Err(CalcError::UnknownAtom(atom.to_owned())),
        }
    }
}

// `powf` answers NaN for a negative base and fractional exponent;
// surface that as a domain failure instead of letting it spread.
fn pow(base: f64, exponent: f64, op: &str) -> Result<f64, CalcError> {
    let value = base.powf(exponent);
    if value.is_nan() && !base.is_nan() && !exponent.is_nan() {
        return Err(CalcError::OutOfDomain(
            PartialComp::binary(op, base, exponent),
        ));
    }
    Ok(value)
}

/// Defined for nonnegative integers only; anything else is out of the
/// domain rather than NaN.
fn factorial(n: f64) -> Result<f64, CalcError> {
    if n < 0.0 || n.fract() != 0.0 {
        return Err(CalcError::OutOfDomain(
            PartialComp::unary("factorial", n),
        ));
    }
    let mut product = 1.0;
    let mut i = 2.0;
    while i <= n {
        product *= i;
        i += 1.0;
    }
    Ok(product)
}

pub fn evaluate<E>(
    expr: &Expr,
    bindings: &Bindings,
    env: &mut E,
) -> Result<f64, CalcError>
    where E: Environment
{
    match *expr {
        Expr::Number(n) => Ok(n),
        Expr::Var(ref name) => {
            if let Some(&value) = bindings.get(name) {
                return Ok(value);
            }
            match env.arity(name) {
                Some(0) => env.resolve(name, &[]),
                Some(expected) => Err(CalcError::ArityMismatch {
                    atom: name.clone(),
                    expected,
                    found: 0,
                }),
                None => Err(CalcError::UnknownAtom(name.clone())),
            }
        }
        Expr::Neg(ref inner) => {
            Ok(-evaluate(inner, bindings, env)?)
        }
        Expr::Binary(op, ref lhs, ref rhs) => {
            let lhs = evaluate(lhs, bindings, env)?;
            let rhs = evaluate(rhs, bindings, env)?;
            match op {
                BinOp::Add => Ok(lhs + rhs),
                BinOp::Sub => Ok(lhs - rhs),
                BinOp::Mul => Ok(lhs * rhs),
                BinOp::Div => {
                    if rhs == 0.0 {
                        Err(CalcError::DivideByZero)
                    } else {
                        Ok(lhs / rhs)
                    }
                }
                BinOp::Pow => pow(lhs, rhs, "^"),
            }
        }
        Expr::Call(ref name, ref args) => {
            let expected = match env.arity(name) {
                Some(n) => n,
                None => return Err(CalcError::UnknownAtom(name.clone())),
            };
            if expected != args.len() {
                return Err(CalcError::ArityMismatch {
                    atom: name.clone(),
                    expected,
                    found: args.len(),
                });
            }
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(evaluate(arg, bindings, env)?);
            }
            env.resolve(name, &values)
        }
    }
}
