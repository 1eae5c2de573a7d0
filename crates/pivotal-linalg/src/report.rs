use std::cell::RefCell;

use pivotal_core::Float;

/// Outcome of one solve, handed to a [`Reporter`].
#[derive(Debug, Clone, PartialEq)]
pub enum Report<'a, T: Float> {
    /// The pivot selected for `column` was exactly zero.
    NoUniqueSolution { column: usize },
    Solved { solution: &'a [T] },
}

/// Receives the diagnostic outcome of every solve.
pub trait Reporter<T: Float> {
    fn report(&self, report: Report<'_, T>);
}

impl<T: Float, R: Reporter<T> + ?Sized> Reporter<T> for &R {
    fn report(&self, report: Report<'_, T>) {
        (**self).report(report)
    }
}

/// Forwards reports to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl<T: Float> Reporter<T> for LogReporter {
    fn report(&self, report: Report<'_, T>) {
        match report {
            Report::NoUniqueSolution { column } => {
                log::warn!("No unique solution for the given system (zero pivot in column {})", column);
            }
            Report::Solved { solution } => {
                log::info!("Solved {}x{} system: {:?}", solution.len(), solution.len(), solution);
            }
        }
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl<T: Float> Reporter<T> for NullReporter {
    fn report(&self, _report: Report<'_, T>) {}
}

/// Owned copy of a [`Report`], kept by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded<T: Float> {
    NoUniqueSolution { column: usize },
    Solved { solution: Vec<T> },
}

/// Keeps every report in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingReporter<T: Float> {
    reports: RefCell<Vec<Recorded<T>>>,
}

impl<T: Float> RecordingReporter<T> {
    pub fn new() -> Self {
        RecordingReporter {
            reports: RefCell::new(Vec::new()),
        }
    }

    pub fn reports(&self) -> Vec<Recorded<T>> {
        self.reports.borrow().clone()
    }
}

impl<T: Float> Reporter<T> for RecordingReporter<T> {
    fn report(&self, report: Report<'_, T>) {
        let recorded = match report {
            Report::NoUniqueSolution { column } => Recorded::NoUniqueSolution { column },
            Report::Solved { solution } => Recorded::Solved {
                solution: solution.to_vec(),
            },
        };
        self.reports.borrow_mut().push(recorded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_reporter_keeps_order() {
        let rec = RecordingReporter::<f64>::new();
        rec.report(Report::NoUniqueSolution { column: 1 });
        rec.report(Report::Solved { solution: &[1.0, 2.0] });
        assert_eq!(
            rec.reports(),
            vec![
                Recorded::NoUniqueSolution { column: 1 },
                Recorded::Solved { solution: vec![1.0, 2.0] },
            ]
        );
    }

    #[test]
    fn test_reporter_by_reference() {
        let rec = RecordingReporter::<f32>::new();
        let by_ref = &rec;
        by_ref.report(Report::Solved { solution: &[3.0] });
        assert_eq!(rec.reports().len(), 1);
    }

    #[test]
    fn test_log_reporter_accepts_f32_and_f64() {
        // Without an installed logger the records still get formatted.
        log::set_max_level(log::LevelFilter::Trace);
        let reporter = LogReporter;
        Reporter::<f64>::report(&reporter, Report::NoUniqueSolution { column: 0 });
        Reporter::<f64>::report(&reporter, Report::Solved { solution: &[84.5, -15.5] });
        Reporter::<f32>::report(&reporter, Report::NoUniqueSolution { column: 2 });
        Reporter::<f32>::report(&reporter, Report::Solved { solution: &[f32::NAN, 1.0] });
    }
}
