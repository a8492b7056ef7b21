use crate::error::{MacroError, Result};

/// Direction of a linear inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    LessOrEqual,
    GreaterOrEqual,
}

impl Relation {
    /// Relation after multiplying both sides by -1.
    pub fn flipped(self) -> Self {
        match self {
            Relation::LessOrEqual => Relation::GreaterOrEqual,
            Relation::GreaterOrEqual => Relation::LessOrEqual,
        }
    }

    /// Check `lhs <relation> rhs` allowing `tolerance` of slack.
    pub fn holds(self, lhs: f64, rhs: f64, tolerance: f64) -> bool {
        match self {
            Relation::LessOrEqual => lhs <= rhs + tolerance,
            Relation::GreaterOrEqual => lhs >= rhs - tolerance,
        }
    }
}

/// One row `coefficients · x <relation> rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub coefficients: Vec<f64>,
    pub relation: Relation,
    pub rhs: f64,
}

impl Constraint {
    pub fn less_or_equal(coefficients: Vec<f64>, rhs: f64) -> Self {
        Self {
            coefficients,
            relation: Relation::LessOrEqual,
            rhs,
        }
    }

    pub fn greater_or_equal(coefficients: Vec<f64>, rhs: f64) -> Self {
        Self {
            coefficients,
            relation: Relation::GreaterOrEqual,
            rhs,
        }
    }

    /// Left-hand side evaluated at `x`.
    pub fn lhs(&self, x: &[f64]) -> f64 {
        self.coefficients.iter().zip(x).map(|(a, v)| a * v).sum()
    }

    pub fn is_satisfied_by(&self, x: &[f64], tolerance: f64) -> bool {
        self.relation.holds(self.lhs(x), self.rhs, tolerance)
    }
}

/// `minimize objective · x` subject to the constraints and `x >= 0`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearProgram {
    objective: Vec<f64>,
    constraints: Vec<Constraint>,
}

impl LinearProgram {
    pub fn new(objective: Vec<f64>) -> Self {
        Self {
            objective,
            constraints: Vec::new(),
        }
    }

    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn objective_value(&self, x: &[f64]) -> f64 {
        self.objective.iter().zip(x).map(|(c, v)| c * v).sum()
    }

    /// Whether `x` is non-negative and satisfies every row within `tolerance`.
    pub fn is_feasible(&self, x: &[f64], tolerance: f64) -> bool {
        x.len() == self.num_variables()
            && x.iter().all(|v| *v >= -tolerance)
            && self
                .constraints
                .iter()
                .all(|c| c.is_satisfied_by(x, tolerance))
    }

    /// Reject programs with mismatched dimensions or non-finite data.
    pub fn validate(&self) -> Result<()> {
        let n = self.num_variables();
        if n == 0 {
            return Err(MacroError::InvalidInput(
                "linear program has no variables".to_string(),
            ));
        }
        if self.objective.iter().any(|c| !c.is_finite()) {
            return Err(MacroError::InvalidInput(
                "objective has non-finite coefficients".to_string(),
            ));
        }

        for (i, constraint) in self.constraints.iter().enumerate() {
            if constraint.coefficients.len() != n {
                return Err(MacroError::InvalidInput(format!(
                    "constraint {} has {} coefficients, expected {}",
                    i,
                    constraint.coefficients.len(),
                    n
                )));
            }
            if !constraint.rhs.is_finite() || constraint.coefficients.iter().any(|a| !a.is_finite())
            {
                return Err(MacroError::InvalidInput(format!(
                    "constraint {} has non-finite values",
                    i
                )));
            }
        }

        Ok(())
    }
}
