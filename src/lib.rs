use log::debug;

use crate::{
    config::Config,
    error::Result,
    expression::Expression,
    fraction::Fraction,
    limit::{parse_target, Limit, LimitSolver},
};

pub mod config;
pub mod error;
pub mod expression;
pub mod fraction;
pub mod limit;

/// Outcome of [`solve_limit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub target: f64,
    pub limit: Limit,
    pub fraction: Fraction,
}

/// Estimates `lim f(x)/g(x)` as `x` approaches `target`.
///
/// `target` is parsed by [`parse_target`]. A non-finite estimate fails when
/// converting it to a fraction.
pub fn solve_limit(f: &str, g: &str, target: &str, config: &Config) -> Result<Report> {
    let f = Expression::parse(f)?;
    let g = Expression::parse(g)?;
    let target = parse_target(target)?;
    debug!("f = {f}, g = {g}, x -> {target}");

    let solver = LimitSolver::new(config.solver);
    let limit = solver.solve(|x| f.eval(x), |x| g.eval(x), target)?;
    let fraction = Fraction::from_decimal(limit.value, &config.fraction)?;

    Ok(Report {
        target,
        limit,
        fraction,
    })
}
