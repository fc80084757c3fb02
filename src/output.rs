use std::io;
use std::time::Duration;

use console::{style, Term};
use kempe_backend::{Allocator, Method};
use kempe_common::Coloring;

/// Prints what an allocator was given and what it produced.
pub struct Report<'a> {
    term: Term,
    allocator: &'a Allocator,
    method: Method,
    coloring: &'a Coloring,
}

impl<'a> Report<'a> {
    pub fn new(allocator: &'a Allocator, method: Method, coloring: &'a Coloring) -> Self {
        Self {
            term: Term::stdout(),
            allocator,
            method,
            coloring,
        }
    }

    /// Print the interference matrix, the registers and the program points.
    pub fn print_input(&self) -> io::Result<()> {
        self.heading("Interference Graph")?;
        let graph = self.allocator.graph();
        if !graph.is_empty() {
            self.term.write_line(&graph.to_string())?;
        }

        self.heading("Register Set")?;
        self.term
            .write_str(&self.allocator.registers().to_string())?;

        self.heading("Program Points")?;
        for point in self.allocator.points() {
            self.term.write_line(&point.to_string())?;
        }

        Ok(())
    }

    /// Print the variables held by each register, then the spilled ones.
    pub fn print_allocation(&self) -> io::Result<()> {
        self.heading("Register Allocation Results")?;

        for (reg, vars) in self.coloring.by_register() {
            let vars: Vec<_> = vars.iter().map(|var| var.name()).collect();
            self.term
                .write_line(&format!("{}: {}", style(format!("r{reg}")).bold(), vars.join(", ")))?;
        }

        self.term.write_line("")?;

        let spilled: Vec<_> = self.coloring.spilled().map(|var| var.name()).collect();
        if spilled.is_empty() {
            self.term
                .write_line(&style("No variables needed to be spilled.").green().to_string())
        } else {
            self.term.write_line(&format!(
                "{} {}",
                style("Spilled variables:").yellow(),
                spilled.join(", ")
            ))
        }
    }

    /// Print the figures a benchmark would record for this run.
    pub fn print_summary(&self) -> io::Result<()> {
        self.term.write_line("")?;
        self.term.write_line(&format!(
            "{}: {} variables, {} spilled ({:.1}%), {} of {} registers used, {} edges, solved in {}",
            style(self.method).cyan().bold(),
            self.coloring.len(),
            self.coloring.spill_count(),
            self.coloring.spill_percentage(),
            self.coloring.registers_used(),
            self.allocator.registers().capacity(),
            self.allocator.graph().edge_count(),
            format_duration(self.allocator.last_solve_time()),
        ))
    }

    fn heading(&self, title: &str) -> io::Result<()> {
        self.term.write_line("")?;
        self.term
            .write_line(&style(format!("{title}:")).bold().to_string())
    }
}

fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1000 {
        format!("{micros}µs")
    } else {
        format!("{:.3}ms", duration.as_secs_f64() * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::format_duration;

    #[test]
    fn format_short_duration() {
        assert_eq!("12µs", format_duration(Duration::from_micros(12)));
    }

    #[test]
    fn format_long_duration() {
        assert_eq!("2.500ms", format_duration(Duration::from_micros(2500)));
    }
}
