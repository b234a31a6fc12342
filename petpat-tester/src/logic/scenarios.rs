//! Named scenarios the tester can price, each a scripted list of session actions.
use anyhow::{Context, Result, ensure};
use petpat_core::{
    AcquisitionMethod, ActivityLevel, AnnualLimit, BreedCatalog, CostCategory, CostLevel,
    Deductible, EstimatorSession, FoodPrice, Reimbursement, SessionAction, SizeCategory,
    WeightUnit,
};

pub struct TestScenario {
    pub key: &'static str,
    pub description: &'static str,
    pub script: fn(&BreedCatalog) -> Result<Vec<SessionAction>>,
    /// Scenario-specific expectations on top of the shared invariants.
    pub expect: fn(&EstimatorSession) -> Result<()>,
}

impl TestScenario {
    /// Replay the script into a fresh session.
    pub fn build(&self, catalog: &BreedCatalog) -> Result<EstimatorSession> {
        let mut session = EstimatorSession::new();
        for action in (self.script)(catalog)? {
            session.apply(action);
        }
        Ok(session)
    }
}

fn no_expectations(_: &EstimatorSession) -> Result<()> {
    Ok(())
}

fn default_script(_: &BreedCatalog) -> Result<Vec<SessionAction>> {
    Ok(Vec::new())
}

fn default_expect(session: &EstimatorSession) -> Result<()> {
    let b = session.breakdown();
    ensure!(b.summary.monthly == 172, "monthly total {} != 172", b.summary.monthly);
    ensure!(b.one_time.total() == 1045, "one-time total {} != 1045", b.one_time.total());
    ensure!(b.annual_fixed.total() == 740, "annual fixed {} != 740", b.annual_fixed.total());
    Ok(())
}

fn all_off_script(_: &BreedCatalog) -> Result<Vec<SessionAction>> {
    Ok([
        CostCategory::Treats,
        CostCategory::Grooming,
        CostCategory::ToysSupplies,
        CostCategory::Insurance,
        CostCategory::TrainingClasses,
    ]
    .into_iter()
    .map(|category| SessionAction::SetEnabled {
        category,
        enabled: false,
    })
    .collect())
}

fn all_off_expect(session: &EstimatorSession) -> Result<()> {
    let b = session.breakdown();
    ensure!(b.monthly.len() == 2, "expected food and meds only, got {}", b.monthly.len());
    ensure!(b.monthly_all.len() == CostCategory::MONTHLY.len(), "monthly_all lost categories");
    Ok(())
}

fn giant_script(_: &BreedCatalog) -> Result<Vec<SessionAction>> {
    Ok(vec![
        SessionAction::SetSize {
            size: SizeCategory::Giant,
        },
        SessionAction::SetCostLevel {
            level: CostLevel::VeryHigh,
        },
        SessionAction::SetAcquisition {
            method: AcquisitionMethod::Buy,
        },
        SessionAction::SetEnabled {
            category: CostCategory::TrainingClasses,
            enabled: true,
        },
    ])
}

fn giant_expect(session: &EstimatorSession) -> Result<()> {
    let giant = session.breakdown();
    let baseline = EstimatorSession::new().breakdown();
    ensure!(
        giant.summary.first_year > baseline.summary.first_year,
        "giant/veryHigh/buy first year {} not above default {}",
        giant.summary.first_year,
        baseline.summary.first_year
    );
    ensure!(
        giant.one_time.get(CostCategory::PurchasePrice).is_some(),
        "buying must price a purchase"
    );
    ensure!(
        giant.one_time.get(CostCategory::AdoptionFee).is_none(),
        "buying must not charge an adoption fee"
    );
    Ok(())
}

fn overrides_script(_: &BreedCatalog) -> Result<Vec<SessionAction>> {
    Ok(vec![
        SessionAction::SetOverride {
            category: CostCategory::Food,
            text: "50".into(),
        },
        SessionAction::SetOverride {
            category: CostCategory::Insurance,
            text: "61.4".into(),
        },
        SessionAction::SetOverride {
            category: CostCategory::Grooming,
            text: "not a number".into(),
        },
        SessionAction::OpenDetail {
            category: CostCategory::Food,
        },
    ])
}

fn overrides_expect(session: &EstimatorSession) -> Result<()> {
    let b = session.breakdown();
    let baseline = EstimatorSession::new().breakdown();
    let food = baseline
        .monthly
        .get(CostCategory::Food)
        .context("baseline food line")?;
    ensure!(
        b.summary.monthly + food == baseline.summary.monthly + 50,
        "food override of 50 moved the monthly total to {}",
        b.summary.monthly
    );
    ensure!(b.monthly_all.get(CostCategory::Insurance) == Some(61), "insurance override not rounded");
    ensure!(
        b.monthly.get(CostCategory::Grooming) == baseline.monthly.get(CostCategory::Grooming),
        "invalid override text must be ignored"
    );
    Ok(())
}

fn custom_price_script(_: &BreedCatalog) -> Result<Vec<SessionAction>> {
    Ok(vec![
        SessionAction::OpenDetail {
            category: CostCategory::Food,
        },
        SessionAction::SetActivity {
            activity: ActivityLevel::Active,
        },
        SessionAction::SetCustomPrice {
            text: "4.25".into(),
        },
    ])
}

fn custom_price_expect(session: &EstimatorSession) -> Result<()> {
    let food = session.estimate().food;
    ensure!(
        session.params().food.price == FoodPrice::Custom(4.25),
        "custom price not applied"
    );
    ensure!((food.price_per_lb - 4.25).abs() < 1e-9, "calc used {}", food.price_per_lb);
    ensure!((food.activity_factor - ActivityLevel::Active.factor()).abs() < 1e-9, "activity ignored");
    ensure!(session.custom_price_input() == "4.25", "raw input not kept");
    Ok(())
}

fn senior_script(_: &BreedCatalog) -> Result<Vec<SessionAction>> {
    Ok(vec![
        SessionAction::SetEnabled {
            category: CostCategory::Insurance,
            enabled: true,
        },
        SessionAction::OpenDetail {
            category: CostCategory::Insurance,
        },
        SessionAction::SetAge { years: 42 },
        SessionAction::SetReimbursement {
            reimbursement: Reimbursement::Pct90,
        },
        SessionAction::SetDeductible {
            deductible: Deductible::Usd100,
        },
        SessionAction::SetAnnualLimit {
            limit: AnnualLimit::Unlimited,
        },
    ])
}

fn senior_expect(session: &EstimatorSession) -> Result<()> {
    let quote = session.estimate().insurance;
    ensure!(session.params().insurance.age_years == 20, "age not clamped to 20");
    ensure!(quote.low <= quote.estimate && quote.estimate <= quote.high, "quote band out of order");
    ensure!(
        session.breakdown().monthly.get(CostCategory::Insurance) == Some(quote.estimate),
        "enabled insurance missing from totals"
    );
    Ok(())
}

fn small_breed_script(catalog: &BreedCatalog) -> Result<Vec<SessionAction>> {
    let breed = catalog
        .find("Chihuahua")
        .cloned()
        .context("catalog is missing Chihuahua")?;
    Ok(vec![
        SessionAction::SelectBreed { breed },
        SessionAction::OpenDetail {
            category: CostCategory::Food,
        },
        SessionAction::SetWeightInput {
            text: "2.5".into(),
            unit: WeightUnit::Kg,
        },
    ])
}

fn small_breed_expect(session: &EstimatorSession) -> Result<()> {
    ensure!(session.params().size == SizeCategory::Small, "Chihuahua must be small");
    let lbs = session.params().food.weight_lbs.context("weight not set")?;
    ensure!((WeightUnit::Kg.from_lbs(lbs) - 2.5).abs() < 1e-9, "kg input stored as {lbs} lbs");
    Ok(())
}

const SCENARIOS: &[TestScenario] = &[
    TestScenario {
        key: "default",
        description: "Medium dog, average costs, adopted, defaults everywhere",
        script: default_script,
        expect: default_expect,
    },
    TestScenario {
        key: "all-off",
        description: "Every optional category switched off",
        script: all_off_script,
        expect: all_off_expect,
    },
    TestScenario {
        key: "giant-veryhigh-buy",
        description: "Giant dog bought from a breeder in a very expensive area, with training",
        script: giant_script,
        expect: giant_expect,
    },
    TestScenario {
        key: "overrides",
        description: "Manual amounts on food, disabled insurance and an invalid grooming entry",
        script: overrides_script,
        expect: overrides_expect,
    },
    TestScenario {
        key: "custom-price",
        description: "Active dog on a custom food price",
        script: custom_price_script,
        expect: custom_price_expect,
    },
    TestScenario {
        key: "senior-insurance",
        description: "Insurance enabled for an out-of-range age on the richest plan",
        script: senior_script,
        expect: senior_expect,
    },
    TestScenario {
        key: "small-breed-kg",
        description: "Chihuahua with a weight typed in kg",
        script: small_breed_script,
        expect: small_breed_expect,
    },
    TestScenario {
        key: "smoke",
        description: "Default scenario, invariants only",
        script: default_script,
        expect: no_expectations,
    },
];

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description))
}

pub fn get_scenario(key: &str) -> Option<&'static TestScenario> {
    let key = key.to_lowercase();
    SCENARIOS.iter().find(|s| s.key == key)
}

/// Every scenario key except the smoke alias.
pub fn all_keys() -> Vec<String> {
    SCENARIOS
        .iter()
        .filter(|s| s.key != "smoke")
        .map(|s| s.key.to_string())
        .collect()
}
