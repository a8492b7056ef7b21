// Indexed loops read better for tableau arithmetic
#![allow(clippy::needless_range_loop)]

use tracing::{debug, trace};

use crate::error::{MacroError, Result};
use crate::solver::problem::{LinearProgram, Relation};

/// Numerical settings for [`solve`].
#[derive(Debug, Clone)]
pub struct SolverOptions {
    /// Values within this distance of zero count as zero.
    pub tolerance: f64,
    /// Pivot cap per tableau dimension (rows + columns).
    pub iteration_factor: usize,
    /// Consecutive degenerate pivots after which entering columns are chosen
    /// by Bland's rule. `None` uses the number of constraint rows.
    pub degenerate_pivot_limit: Option<usize>,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            iteration_factor: 50,
            degenerate_pivot_limit: None,
        }
    }
}

impl SolverOptions {
    /// Maximum pivots for a tableau with the given shape.
    pub fn iteration_limit(&self, rows: usize, columns: usize) -> usize {
        self.iteration_factor.saturating_mul(rows + columns)
    }
}

/// Optimal vertex of a linear program.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// One value per structural variable, never negative.
    pub values: Vec<f64>,
    pub objective: f64,
    /// Pivots performed across both phases.
    pub iterations: usize,
}

/// Minimize the program's objective over its feasible region.
///
/// Two-phase tableau simplex. Entering column: most negative reduced cost,
/// lowest index on ties; after [`SolverOptions::degenerate_pivot_limit`]
/// degenerate pivots in a row, the first negative reduced cost (Bland's rule)
/// until progress resumes. Leaving row: minimum ratio, ties broken by the
/// lowest basic variable index.
///
/// # Errors
///
/// - `InvalidInput` for malformed programs
/// - `Infeasible` when phase 1 cannot drive the artificials to zero
/// - `Unbounded` when the objective decreases without limit
/// - `NonConvergence` when the pivot cap is reached
pub fn solve(program: &LinearProgram, options: &SolverOptions) -> Result<Solution> {
    program.validate()?;

    let tol = options.tolerance;
    let mut tableau = Tableau::new(program);
    let limit = options.iteration_limit(tableau.num_rows(), tableau.num_columns());
    let bland_after = options
        .degenerate_pivot_limit
        .unwrap_or_else(|| tableau.num_rows());
    let mut iterations = 0;

    if tableau.has_artificials() {
        tableau.load_phase_one_costs();
        tableau.run(true, tol, bland_after, &mut iterations, limit)?;

        let infeasibility = tableau.objective_value();
        debug!(infeasibility, iterations, "phase 1 finished");
        if infeasibility > tol {
            return Err(MacroError::Infeasible);
        }
        tableau.drive_out_artificials(tol);
    }

    tableau.load_phase_two_costs(program.objective());
    tableau.run(false, tol, bland_after, &mut iterations, limit)?;

    let values = tableau.structural_values();
    let objective = program.objective_value(&values);
    debug!(objective, iterations, "phase 2 finished");

    Ok(Solution {
        values,
        objective,
        iterations,
    })
}

/// Standard-form tableau.
///
/// Column layout: `[structural | slack/surplus (one per row) | artificial | rhs]`.
/// The last row holds reduced costs; its rhs entry is the negated objective.
struct Tableau {
    /// Constraint rows followed by the cost row.
    rows: Vec<Vec<f64>>,
    /// Basic variable of each constraint row.
    basis: Vec<usize>,
    num_structural: usize,
    artificial_start: usize,
    num_columns: usize,
}

impl Tableau {
    fn new(program: &LinearProgram) -> Self {
        let n = program.num_variables();
        let m = program.num_constraints();

        // Flip rows with negative rhs so every basic value starts non-negative.
        let normalized: Vec<(Vec<f64>, Relation, f64)> = program
            .constraints()
            .iter()
            .map(|c| {
                if c.rhs < 0.0 {
                    (
                        c.coefficients.iter().map(|a| -a).collect(),
                        c.relation.flipped(),
                        -c.rhs,
                    )
                } else {
                    (c.coefficients.clone(), c.relation, c.rhs)
                }
            })
            .collect();

        let num_artificial = normalized
            .iter()
            .filter(|(_, relation, _)| *relation == Relation::GreaterOrEqual)
            .count();
        let artificial_start = n + m;
        let num_columns = artificial_start + num_artificial;

        let mut rows = vec![vec![0.0; num_columns + 1]; m + 1];
        let mut basis = vec![0; m];
        let mut next_artificial = artificial_start;

        for (i, (coefficients, relation, rhs)) in normalized.into_iter().enumerate() {
            rows[i][..n].copy_from_slice(&coefficients);
            rows[i][num_columns] = rhs;
            match relation {
                Relation::LessOrEqual => {
                    rows[i][n + i] = 1.0;
                    basis[i] = n + i;
                }
                Relation::GreaterOrEqual => {
                    rows[i][n + i] = -1.0;
                    rows[i][next_artificial] = 1.0;
                    basis[i] = next_artificial;
                    next_artificial += 1;
                }
            }
        }

        Self {
            rows,
            basis,
            num_structural: n,
            artificial_start,
            num_columns,
        }
    }

    fn num_rows(&self) -> usize {
        self.basis.len()
    }

    fn num_columns(&self) -> usize {
        self.num_columns
    }

    fn has_artificials(&self) -> bool {
        self.num_columns > self.artificial_start
    }

    fn rhs(&self, row: usize) -> f64 {
        self.rows[row][self.num_columns]
    }

    fn is_artificial(&self, column: usize) -> bool {
        column >= self.artificial_start
    }

    /// Current value of the loaded objective.
    fn objective_value(&self) -> f64 {
        -self.rows[self.num_rows()][self.num_columns]
    }

    /// Minimize the sum of artificials, expressed in the starting basis.
    fn load_phase_one_costs(&mut self) {
        let m = self.num_rows();
        let mut cost = vec![0.0; self.num_columns + 1];
        for i in 0..m {
            if self.is_artificial(self.basis[i]) {
                for j in 0..self.artificial_start {
                    cost[j] -= self.rows[i][j];
                }
                cost[self.num_columns] -= self.rhs(i);
            }
        }
        self.rows[m] = cost;
    }

    /// Load the real objective and price out the current basis.
    fn load_phase_two_costs(&mut self, objective: &[f64]) {
        let m = self.num_rows();
        let mut cost = vec![0.0; self.num_columns + 1];
        cost[..self.num_structural].copy_from_slice(objective);

        for i in 0..m {
            let basic_cost = cost[self.basis[i]];
            if basic_cost != 0.0 {
                for j in 0..=self.num_columns {
                    cost[j] -= basic_cost * self.rows[i][j];
                }
            }
        }
        self.rows[m] = cost;
    }

    /// Pivot zero-level artificials out of the basis where a real column can
    /// replace them. Rows with no such column are redundant and keep their
    /// artificial, which is barred from re-entering.
    fn drive_out_artificials(&mut self, tol: f64) {
        for i in 0..self.num_rows() {
            if !self.is_artificial(self.basis[i]) {
                continue;
            }
            let replacement = (0..self.artificial_start).find(|&j| self.rows[i][j].abs() > tol);
            if let Some(j) = replacement {
                trace!(row = i, column = j, "driving artificial out of basis");
                self.pivot(i, j);
            }
        }
    }

    fn entering_column(&self, allow_artificial: bool, bland: bool, tol: f64) -> Option<usize> {
        let cost = &self.rows[self.num_rows()];
        let end = if allow_artificial {
            self.num_columns
        } else {
            self.artificial_start
        };

        if bland {
            return (0..end).find(|&j| cost[j] < -tol);
        }

        let mut best = None;
        let mut most_negative = -tol;
        for j in 0..end {
            if cost[j] < most_negative {
                most_negative = cost[j];
                best = Some(j);
            }
        }
        best
    }

    /// Minimum-ratio row for `column`, with its ratio.
    fn leaving_row(&self, column: usize, tol: f64) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for i in 0..self.num_rows() {
            let a = self.rows[i][column];
            if a <= tol {
                continue;
            }
            let ratio = self.rhs(i) / a;
            best = match best {
                None => Some((i, ratio)),
                Some((r, best_ratio)) => {
                    let tie = (ratio - best_ratio).abs() <= tol;
                    if (!tie && ratio < best_ratio) || (tie && self.basis[i] < self.basis[r]) {
                        Some((i, ratio))
                    } else {
                        Some((r, best_ratio))
                    }
                }
            };
        }
        best
    }

    fn run(
        &mut self,
        allow_artificial: bool,
        tol: f64,
        bland_after: usize,
        iterations: &mut usize,
        limit: usize,
    ) -> Result<()> {
        let mut degenerate_streak = 0;

        loop {
            let bland = degenerate_streak >= bland_after;
            let Some(column) = self.entering_column(allow_artificial, bland, tol) else {
                return Ok(());
            };

            if *iterations >= limit {
                return Err(MacroError::NonConvergence {
                    iterations: *iterations,
                });
            }

            let Some((row, ratio)) = self.leaving_row(column, tol) else {
                return Err(MacroError::Unbounded);
            };

            if ratio <= tol {
                degenerate_streak += 1;
            } else {
                degenerate_streak = 0;
            }

            trace!(row, column, ratio, bland, "pivot");
            self.pivot(row, column);
            *iterations += 1;
        }
    }

    fn pivot(&mut self, row: usize, column: usize) {
        let pivot = self.rows[row][column];
        for v in self.rows[row].iter_mut() {
            *v /= pivot;
        }

        let pivot_row = self.rows[row].clone();
        for (i, other) in self.rows.iter_mut().enumerate() {
            if i == row {
                continue;
            }
            let factor = other[column];
            if factor != 0.0 {
                for (v, p) in other.iter_mut().zip(&pivot_row) {
                    *v -= factor * p;
                }
            }
        }

        self.basis[row] = column;
    }

    fn structural_values(&self) -> Vec<f64> {
        let mut values = vec![0.0; self.num_structural];
        for (i, &basic) in self.basis.iter().enumerate() {
            if basic < self.num_structural {
                values[basic] = self.rhs(i).max(0.0);
            }
        }
        values
    }
}
