//! Run reporting: per-file status lines and the final tally.

use std::fmt;

use crate::notebook::Outcome;

/// Accumulated outcomes for one processing run, in processing order.
#[derive(Debug, Default)]
pub struct RunSummary {
    outcomes: Vec<Outcome>,
}

impl RunSummary {
    /// Records the outcome for one candidate file.
    pub fn record(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    /// Number of codebook copies actually written.
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Created { .. }))
    }

    /// Number of candidates skipped because their copy already existed,
    /// in real and dry runs alike.
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped { .. } | Outcome::WouldSkip { .. }))
    }

    /// Number of candidates that failed to process.
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    /// True when the locator found nothing to do.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Recorded outcomes, in processing order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No notebooks found to process.");
        }

        for outcome in &self.outcomes {
            writeln!(f, "\nProcessing: {}", outcome.source())?;
            match outcome {
                Outcome::Created { target, .. } => {
                    writeln!(f, "  - Created: {target}")?;
                }
                Outcome::Skipped { target, .. } | Outcome::WouldSkip { target, .. } => {
                    writeln!(f, "  - Skipping: {target} already exists")?;
                }
                Outcome::WouldCreate { target, .. } => {
                    writeln!(f, "  - Would create: {target}")?;
                }
                Outcome::Failed { source, message } => {
                    writeln!(f, "  - Error processing {source}: {message}")?;
                }
            }
        }

        writeln!(f, "\nProcessed {} notebook(s) successfully.", self.created())
    }
}
