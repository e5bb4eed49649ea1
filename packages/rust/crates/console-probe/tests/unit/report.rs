use super::{LineStatus, ProbeReport, ReportLine};

#[test]
fn report_line_renders_glyph_then_text() {
    assert_eq!(ReportLine::pass("CSS: 200").to_string(), "✅ CSS: 200");
    assert_eq!(
        ReportLine::fail("Page title missing").to_string(),
        "❌ Page title missing"
    );
}

#[test]
fn report_counts_pass_and_fail_lines() {
    let mut report = ProbeReport::default();
    report.push(ReportLine::pass("Homepage: 200"));
    report.push(ReportLine::fail("Page title missing"));
    report.push(ReportLine::pass("CSS: 200"));

    assert_eq!(report.passed(), 2);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.lines()[1].status, LineStatus::Fail);
}
