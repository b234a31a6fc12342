use colored::Colorize;
use petpat_core::{BreedCatalog, CostSummary};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::checks::{CHECK_FAMILIES, check_session};
use super::scenarios::TestScenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub description: String,
    pub passed: bool,
    pub checks_run: usize,
    pub failures: Vec<String>,
    /// Headline totals of the priced scenario, absent when it could not be built.
    pub summary: Option<CostSummary>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

pub struct LogicTester {
    catalog: BreedCatalog,
    verbose: bool,
}

impl LogicTester {
    pub fn new(verbose: bool) -> Self {
        Self {
            catalog: BreedCatalog::load_from_static(),
            verbose,
        }
    }

    pub fn run_scenario(&self, scenario: &TestScenario) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Testing scenario: {}", scenario.key.bright_white());
        }
        let start = Instant::now();
        let mut failures = Vec::new();
        let mut summary = None;

        match scenario.build(&self.catalog) {
            Ok(session) => {
                failures.extend(check_session(&session).iter().map(ToString::to_string));
                if let Err(err) = (scenario.expect)(&session) {
                    failures.push(format!("{err:#}"));
                }
                summary = Some(session.breakdown().summary);
            }
            Err(err) => failures.push(format!("could not build scenario: {err:#}")),
        }

        let duration = start.elapsed();
        if self.verbose {
            if failures.is_empty() {
                println!("  ✅ passed ({duration:?})");
            } else {
                for failure in &failures {
                    println!("  ❌ {}", failure.red());
                }
            }
        }
        log::debug!("scenario {} finished with {} failures", scenario.key, failures.len());

        ScenarioResult {
            scenario_name: scenario.key.to_string(),
            description: scenario.description.to_string(),
            passed: failures.is_empty(),
            checks_run: CHECK_FAMILIES + 1,
            failures,
            summary,
            duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::scenarios::get_scenario;

    #[test]
    fn default_scenario_passes_with_summary() {
        let tester = LogicTester::new(false);
        let result = tester.run_scenario(get_scenario("default").unwrap());
        assert!(result.passed, "{:?}", result.failures);
        assert_eq!(result.summary.map(|s| s.monthly), Some(172));
    }

    #[test]
    fn result_serializes_duration_as_micros() {
        let result = ScenarioResult {
            scenario_name: "x".into(),
            description: String::new(),
            passed: true,
            checks_run: 1,
            failures: Vec::new(),
            summary: None,
            duration: Duration::from_millis(3),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["duration"], 3000);
    }
}
