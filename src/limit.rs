//! Numeric estimation of `lim f(x)/g(x)` through L'Hôpital's rule.
//!
//! The estimate is a single symmetric difference quotient of `f` and `g` at
//! the target, not an adaptive or convergent method.

use log::debug;

use crate::{
    config::SolverConfig,
    error::{Error, Result},
};

/// How a target of ±∞ is handled.
///
/// No indeterminate-form check is done for infinite targets in either mode.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum InfinityPolicy {
    /// Differentiate at ±∞ itself. Unless the expressions saturate to a
    /// constant this produces NaN.
    #[default]
    Unchecked,
    /// Differentiate at this finite magnitude, signed like the target.
    Probe(f64),
}

/// Which indeterminate form justified applying the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    ZeroOverZero,
    InfinityOverInfinity,
    /// The target is infinite and the form was not checked.
    Unbounded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limit {
    pub value: f64,
    pub form: Form,
}

#[derive(Debug, Default, Clone)]
pub struct LimitSolver {
    config: SolverConfig,
}

impl LimitSolver {
    pub fn new(config: SolverConfig) -> Self {
        LimitSolver { config }
    }

    pub fn solve<F, G>(&self, f: F, g: G, x: f64) -> Result<Limit>
    where
        F: Fn(f64) -> Result<f64>,
        G: Fn(f64) -> Result<f64>,
    {
        if x.is_infinite() {
            let at = match self.config.infinity {
                InfinityPolicy::Unchecked => x,
                InfinityPolicy::Probe(magnitude) => magnitude.abs().copysign(x),
            };
            debug!("target {x} is infinite, differentiating at {at}");
            return self.lhopital(&f, &g, at, Form::Unbounded);
        }

        let (f_limit, g_limit) = (f(x)?, g(x)?);
        debug!("direct evaluation at {x}: f = {f_limit}, g = {g_limit}");

        let zero = self.config.zero_threshold;
        let form = if f_limit.abs() < zero && g_limit.abs() < zero {
            Form::ZeroOverZero
        } else if f_limit.is_infinite() && g_limit.is_infinite() {
            Form::InfinityOverInfinity
        } else {
            return Err(Error::NotIndeterminate {
                f: f_limit,
                g: g_limit,
            });
        };

        self.lhopital(&f, &g, x, form)
    }

    fn lhopital<F, G>(&self, f: &F, g: &G, x: f64, form: Form) -> Result<Limit>
    where
        F: Fn(f64) -> Result<f64>,
        G: Fn(f64) -> Result<f64>,
    {
        let f_prime = derivative(f, x, self.config.step)?;
        let g_prime = derivative(g, x, self.config.step)?;
        debug!("{form:?} at {x}: f' = {f_prime}, g' = {g_prime}");

        Ok(Limit {
            value: f_prime / g_prime,
            form,
        })
    }
}

/// Symmetric difference quotient `(func(x + h) - func(x - h)) / 2h`.
pub fn derivative<F>(func: F, x: f64, h: f64) -> Result<f64>
where
    F: Fn(f64) -> Result<f64>,
{
    let ahead = func(x + h)?;
    let behind = func(x - h)?;
    Ok((ahead - behind) / (2.0 * h))
}

/// Parses a limit target: a decimal numeral, or `inf`/`-inf` in any case.
pub fn parse_target(input: &str) -> Result<f64> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("inf") || input.eq_ignore_ascii_case("+inf") {
        return Ok(f64::INFINITY);
    }
    if input.eq_ignore_ascii_case("-inf") {
        return Ok(f64::NEG_INFINITY);
    }

    match input.parse::<f64>() {
        Ok(x) if !x.is_nan() => Ok(x),
        _ => Err(Error::InvalidTarget(input.to_owned())),
    }
}
