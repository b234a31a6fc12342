use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use super::ScenarioResult;

#[allow(clippy::cast_precision_loss)]
fn success_rate(results: &[ScenarioResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    passed as f64 / results.len() as f64 * 100.0
}

pub fn generate_console_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
    total_duration: Duration,
    timestamp: &str,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Scenario Results".bright_cyan().bold())?;
    writeln!(out, "{}", "===================".cyan())?;

    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "Run at: {timestamp}")?;
    writeln!(out, "Total scenarios: {}", results.len())?;
    writeln!(out, "Passed: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", (results.len() - passed).to_string().red())?;
    writeln!(out, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(out, "{status} {}", result.scenario_name.bold())?;
        writeln!(out, "   {}", result.description)?;
        if let Some(summary) = result.summary {
            writeln!(
                out,
                "   Monthly ${} · Annual ${} · First year ${}",
                summary.monthly, summary.annual, summary.first_year
            )?;
        }
        writeln!(out, "   Checks: {} in {:?}", result.checks_run, result.duration)?;
        if !result.failures.is_empty() {
            writeln!(out, "   Failures:")?;
            for failure in &result.failures {
                writeln!(out, "     • {}", failure.red())?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(out: &mut W, results: &[ScenarioResult]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(results)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    out: &mut W,
    results: &[ScenarioResult],
    timestamp: &str,
) -> Result<()> {
    writeln!(out, "# PetPat Scenario Results\n")?;
    let passed = results.iter().filter(|r| r.passed).count();
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Run at**: {timestamp}")?;
    writeln!(out, "- **Total scenarios**: {}", results.len())?;
    writeln!(out, "- **Passed**: {passed}")?;
    writeln!(out, "- **Failed**: {}", results.len() - passed)?;
    writeln!(out, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(out, "## Detailed Results\n")?;
    writeln!(out, "| Scenario | Status | Monthly | Annual | First year |")?;
    writeln!(out, "|---|---|---:|---:|---:|")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        let cells = result.summary.map_or_else(
            || "– | – | –".to_string(),
            |s| format!("${} | ${} | ${}", s.monthly, s.annual, s.first_year),
        );
        writeln!(out, "| {} | {status} | {cells} |", result.scenario_name)?;
    }
    for result in results.iter().filter(|r| !r.passed) {
        writeln!(out, "\n### ❌ {}\n", result.scenario_name)?;
        for failure in &result.failures {
            writeln!(out, "- {failure}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use petpat_core::CostSummary;

    fn sample(passed: bool) -> ScenarioResult {
        ScenarioResult {
            scenario_name: if passed { "default" } else { "broken" }.to_string(),
            description: "sample".to_string(),
            passed,
            checks_run: 8,
            failures: if passed {
                Vec::new()
            } else {
                vec!["monthly total 1 != 172".to_string()]
            },
            summary: Some(CostSummary {
                monthly: 172,
                annual: 2804,
                first_year: 3849,
            }),
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn markdown_lists_failures_under_their_scenario() {
        let mut buf = Vec::new();
        generate_markdown_report(&mut buf, &[sample(true), sample(false)], "2025-01-01T00:00:00Z")
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("| default | ✅ | $172 | $2804 | $3849 |"));
        assert!(text.contains("### ❌ broken"));
        assert!(text.contains("- monthly total 1 != 172"));
        assert!(text.contains("50.0%"));
    }

    #[test]
    fn json_report_is_an_array() {
        let mut buf = Vec::new();
        generate_json_report(&mut buf, &[sample(true)]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["scenario_name"], "default");
        assert_eq!(value[0]["summary"]["first_year"], 3849);
    }

    #[test]
    fn console_report_counts_passes() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        generate_console_report(&mut buf, &[sample(true)], Duration::from_millis(2), "now").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Passed: 1"));
        assert!(text.contains("Monthly $172"));
    }
}
