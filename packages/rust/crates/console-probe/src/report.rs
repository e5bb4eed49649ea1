//! Human-readable report lines.

use std::fmt;

/// Line printed before the first check.
pub const BANNER: &str = "🔍 Testing RabbitMQ Web Interface...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    Pass,
    Fail,
}

impl LineStatus {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Pass => "✅",
            Self::Fail => "❌",
        }
    }
}

/// One printed status line: glyph plus text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub status: LineStatus,
    pub text: String,
}

impl ReportLine {
    pub fn pass(text: impl Into<String>) -> Self {
        Self {
            status: LineStatus::Pass,
            text: text.into(),
        }
    }

    pub fn fail(text: impl Into<String>) -> Self {
        Self {
            status: LineStatus::Fail,
            text: text.into(),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.glyph(), self.text)
    }
}

/// Every line a run printed, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    lines: Vec<ReportLine>,
}

impl ProbeReport {
    pub fn push(&mut self, line: ReportLine) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn passed(&self) -> usize {
        self.count(LineStatus::Pass)
    }

    pub fn failed(&self) -> usize {
        self.count(LineStatus::Fail)
    }

    fn count(&self, status: LineStatus) -> usize {
        self.lines.iter().filter(|line| line.status == status).count()
    }
}

#[cfg(test)]
#[path = "../tests/unit/report.rs"]
mod tests;
