//! Human-readable reports for Jacobi solutions.
//!
//! A [`Report`] borrows the system, the policy that governed the solve, and
//! the resulting [`Solution`], then renders them as Markdown or plain text.
//! Rendering is pure: the caller decides where the text goes.
//!
//! # Example
//!
//! ```rust
//! use jacomat_core::LinearSystem;
//! use jacomat_report::Report;
//! use jacomat_solvers::jacobi::{self, Config, Policy};
//!
//! let system = LinearSystem::from_rows(&[[4.0, -1.0], [-1.0, 4.0]], vec![1.0, 2.0]).unwrap();
//! let policy = Policy::Epsilon(1e-6);
//! let solution = jacobi::solve_unobserved(&system, policy, &Config::default()).unwrap();
//!
//! let markdown = Report::new(&system, policy, &solution).markdown();
//! assert!(markdown.contains("## Solution Vector"));
//! ```

use std::fmt::{self, Display, Formatter};

use jacomat_core::{LinearSystem, unknown_name};
use jacomat_solvers::jacobi::{Policy, Solution, Status};

/// Decimal places used for the coefficient matrix and right-hand side.
const INPUT_PRECISION: usize = 4;

/// Renders a solved system as Markdown or plain text.
///
/// Solution and history values use [`precision`](Report::precision) decimal
/// places (six by default). The iteration history is included unless
/// disabled with [`without_history`](Report::without_history).
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    system: &'a LinearSystem,
    policy: Policy,
    solution: &'a Solution,
    precision: usize,
    include_history: bool,
}

impl<'a> Report<'a> {
    /// Creates a report for `solution`, obtained by solving `system` under
    /// `policy`.
    #[must_use]
    pub fn new(system: &'a LinearSystem, policy: Policy, solution: &'a Solution) -> Self {
        Self {
            system,
            policy,
            solution,
            precision: 6,
            include_history: true,
        }
    }

    /// Sets the number of decimal places for solution and history values.
    #[must_use]
    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = digits;
        self
    }

    /// Omits the per-iteration history.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.include_history = false;
        self
    }

    /// Renders the report as a Markdown document.
    #[must_use]
    pub fn markdown(&self) -> String {
        Markdown(self).to_string()
    }

    /// Renders the report as plain text.
    #[must_use]
    pub fn text(&self) -> String {
        Text(self).to_string()
    }

    fn value(&self, value: f64) -> Value {
        Value {
            value,
            precision: self.precision,
        }
    }
}

/// A number printed with fixed precision. Values that round to zero at that
/// precision print as a bare `0`, never `-0.0000`.
#[derive(Clone, Copy)]
struct Value {
    value: f64,
    precision: usize,
}

impl Value {
    fn with_precision(self, precision: usize) -> Self {
        Self { precision, ..self }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rendered = format!("{:.*}", self.precision, self.value);
        if rendered.bytes().all(|b| matches!(b, b'-' | b'0' | b'.')) {
            f.write_str("0")
        } else {
            f.write_str(&rendered)
        }
    }
}

/// Values joined by `sep`.
struct Joined<'a> {
    values: &'a [f64],
    precision: usize,
    sep: &'a str,
}

impl Display for Joined<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, &value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(self.sep)?;
            }
            let precision = self.precision;
            write!(f, "{}", Value { value, precision })?;
        }
        Ok(())
    }
}

fn joined<'a>(values: &'a [f64], precision: usize, sep: &'a str) -> Joined<'a> {
    Joined {
        values,
        precision,
        sep,
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Converged => "converged",
        Status::MaxIters => "iteration limit reached",
        Status::SafetyCeiling => "safety ceiling reached",
        Status::TimedOut => "timed out",
    }
}

struct Markdown<'r, 'a>(&'r Report<'a>);

impl Display for Markdown<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let system = report.system;
        let solution = report.solution;
        let n = system.size();

        writeln!(f, "# Jacobi Method Report")?;
        writeln!(f)?;

        writeln!(f, "## Problem Setup")?;
        writeln!(f)?;
        writeln!(f, "**Matrix A:**")?;
        writeln!(f)?;
        write!(f, "| Row |")?;
        for j in 0..n {
            write!(f, " {} |", unknown_name(j))?;
        }
        writeln!(f)?;
        writeln!(f, "|-----|{}", "---|".repeat(n))?;
        for (i, row) in system.matrix().rows().enumerate() {
            writeln!(f, "| {} | {} |", i + 1, joined(row, INPUT_PRECISION, " | "))?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "**Vector b:** [{}]",
            joined(system.rhs(), INPUT_PRECISION, ", ")
        )?;
        writeln!(f)?;
        writeln!(f, "**System:** Ax = b with n = {n}")?;
        writeln!(f)?;

        writeln!(f, "## Parameters")?;
        writeln!(f)?;
        match report.policy {
            Policy::Epsilon(epsilon) => {
                writeln!(f, "- **Stopping rule:** error tolerance")?;
                writeln!(f, "- **Epsilon (ε):** {epsilon}")?;
            }
            Policy::MaxIters(max_iters) => {
                writeln!(f, "- **Stopping rule:** iteration limit")?;
                writeln!(f, "- **Maximum Iterations:** {max_iters}")?;
                writeln!(
                    f,
                    "- **Early-exit tolerance:** {}",
                    report.policy.threshold()
                )?;
            }
        }
        writeln!(f)?;

        writeln!(f, "## Solution Vector")?;
        writeln!(f)?;
        writeln!(
            f,
            "**x = [{}]**",
            joined(&solution.x, report.precision, ", ")
        )?;
        writeln!(f)?;

        writeln!(f, "## Convergence Analysis")?;
        writeln!(f)?;
        writeln!(f, "- **Converged:** {}", yes_no(solution.converged()))?;
        writeln!(f, "- **Status:** {}", status_label(solution.status))?;
        writeln!(f, "- **Iterations:** {}", solution.iters)?;
        writeln!(f, "- **Final delta:** {:.3e}", solution.delta)?;
        writeln!(f)?;

        if report.include_history {
            writeln!(f, "## Iteration History")?;
            writeln!(f)?;
            write!(f, "| Iteration |")?;
            for j in 0..n {
                write!(f, " {} |", unknown_name(j))?;
            }
            writeln!(f)?;
            writeln!(f, "|-----------|{}", "---|".repeat(n))?;
            for (k, snapshot) in solution.history.iter().enumerate() {
                writeln!(
                    f,
                    "| {} | {} |",
                    k + 1,
                    joined(snapshot, report.precision, " | ")
                )?;
            }
            writeln!(f)?;
        }

        let complexity = solution.complexity;
        writeln!(f, "## Complexity Analysis")?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Operations per iteration:** n² = {}",
            complexity.per_iteration
        )?;
        writeln!(
            f,
            "- **Total operations:** n² × k = {} × {} = {}",
            complexity.per_iteration, solution.iters, complexity.total
        )?;
        writeln!(f, "- **Time complexity:** O(n²k)")?;
        writeln!(f, "- **Space complexity:** O(n²)")?;
        writeln!(
            f,
            "- **Convergence rate:** {}",
            if solution.converged() {
                "linear"
            } else {
                "did not converge"
            }
        )
    }
}

struct Text<'r, 'a>(&'r Report<'a>);

impl Display for Text<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let system = report.system;
        let solution = report.solution;

        writeln!(f, "Jacobi Method Report")?;
        writeln!(f, "--------------------")?;
        writeln!(f, "Matrix (A | b):")?;
        for (row, b) in system.matrix().rows().zip(system.rhs()) {
            writeln!(
                f,
                "  {} | {}",
                joined(row, INPUT_PRECISION, "  "),
                report.value(*b).with_precision(INPUT_PRECISION)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Solution:")?;
        for (i, &x) in solution.x.iter().enumerate() {
            writeln!(f, "  X{} = {}", i + 1, report.value(x))?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Converged: {} ({})",
            yes_no(solution.converged()),
            status_label(solution.status)
        )?;
        writeln!(f, "Total Iterations: {}", solution.iters)?;
        writeln!(
            f,
            "Complexity: O(n² * {}) = O({})",
            solution.iters, solution.complexity.total
        )?;

        if report.include_history {
            writeln!(f)?;
            writeln!(f, "Iteration Details:")?;
            writeln!(f, "------------------")?;
            for (k, snapshot) in solution.history.iter().enumerate() {
                writeln!(f, "Iteration {}:", k + 1)?;
                writeln!(
                    f,
                    "    x = [{}]",
                    joined(snapshot, report.precision, ", ")
                )?;
            }
        }

        Ok(())
    }
}
