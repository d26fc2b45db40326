//! Output formatting for solver results

use crate::runner::DayReport;
use aoc_solver::SolveResult;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    timings: bool,
    headers: bool,
}

impl OutputFormatter {
    /// `headers` adds a `== year day ==` line before each day's answers
    pub fn new(timings: bool, headers: bool) -> Self {
        Self { timings, headers }
    }

    pub fn print_report(&self, report: &DayReport) {
        for line in self.report_lines(report) {
            println!("{line}");
        }
    }

    fn report_lines(&self, report: &DayReport) -> Vec<String> {
        let header = self
            .headers
            .then(|| format!("== {} day {:02} ==", report.year, report.day));

        header
            .into_iter()
            .chain(
                report
                    .results
                    .iter()
                    .map(|result| self.format_result(report, result)),
            )
            .collect()
    }

    fn format_result(&self, report: &DayReport, result: &SolveResult) -> String {
        if self.timings {
            format!(
                "part {}: {} (parse: {}, solve: {})",
                result.part,
                result.answer,
                format_duration(report.parse_duration),
                format_duration(result.duration())
            )
        } else {
            format!("part {}: {}", result.part, result.answer)
        }
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
