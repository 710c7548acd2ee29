//! Plain renderer: bare values on stdout, one per line.
//!
//! Filter groups are each followed by a blank line. [`PlainRenderer::write_group`]
//! streams a group straight to a writer so arbitrarily large ranges never
//! have to be held in memory.

use std::io::{self, Write};

use colored::Colorize;

use crate::models::{DispatchOutcome, FilterOutcome};
use crate::ops::Operation;
use crate::output::OutputRenderer;

/// Plain text renderer.
pub struct PlainRenderer;

impl PlainRenderer {
    /// Write each element as it is produced, then the group's blank line.
    ///
    /// Returns the number of elements written.
    pub fn write_group<W: Write>(
        &self,
        out: &mut W,
        elements: impl Iterator<Item = i64>,
    ) -> io::Result<usize> {
        let mut count = 0;
        for element in elements {
            writeln!(out, "{element}")?;
            count += 1;
        }
        writeln!(out)?;
        Ok(count)
    }
}

impl OutputRenderer for PlainRenderer {
    fn render_dispatch(&self, outcome: &DispatchOutcome) -> String {
        format!("{}\n", outcome.result)
    }

    fn render_filter(&self, outcomes: &[FilterOutcome]) -> String {
        let mut output = Vec::new();
        for outcome in outcomes {
            // Writing into a Vec cannot fail
            let _ = self.write_group(&mut output, outcome.elements.iter().copied());
        }
        String::from_utf8_lossy(&output).into_owned()
    }

    fn render_operations(&self, operations: &[Operation]) -> String {
        let mut output = String::new();
        for op in operations {
            output.push_str(&format!(
                "  {:<10} {}  {}\n",
                op.to_string().bold(),
                op.symbol().to_string().cyan(),
                op.description().dimmed(),
            ));
        }
        output
    }
}
