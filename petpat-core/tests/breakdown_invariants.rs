use petpat_core::{
    AcquisitionMethod, ActivityLevel, AnnualLimit, BreedCatalog, CostBreakdown, CostCategory,
    CostLevel, CostSection, Deductible, FoodPrice, FoodTier, OverrideMap, Reimbursement,
    ScenarioParameters, SizeCategory, calc_food, calc_insurance_premium, estimate,
};
use proptest::prelude::*;

fn section_sum(section: &CostSection) -> u64 {
    section.items().iter().map(|item| item.value).sum()
}

fn assert_consistent(b: &CostBreakdown) {
    assert_eq!(b.one_time.total(), section_sum(&b.one_time));
    assert_eq!(b.monthly.total(), section_sum(&b.monthly));
    assert_eq!(b.monthly_all.total(), section_sum(&b.monthly_all));
    assert_eq!(b.monthly_computed.total(), section_sum(&b.monthly_computed));
    assert_eq!(b.annual_fixed.total(), section_sum(&b.annual_fixed));
    assert_eq!(b.summary.monthly, b.monthly.total());
    assert_eq!(b.summary.annual, 12 * b.monthly.total() + b.annual_fixed.total());
    assert_eq!(b.summary.first_year, b.summary.annual + b.one_time.total());
    assert_eq!(b.lifetime.year5, b.summary.first_year + 4 * b.summary.annual);
    assert_eq!(b.lifetime.year10, b.summary.first_year + 9 * b.summary.annual);
    assert_eq!(b.lifetime.year15, b.summary.first_year + 14 * b.summary.annual);
}

prop_compose! {
    fn scenario_strategy()(
        size in prop::sample::select(SizeCategory::ALL.to_vec()),
        cost_level in prop::sample::select(CostLevel::ALL.to_vec()),
        buy in any::<bool>(),
        toggles in prop::array::uniform5(any::<bool>()),
        weight in prop::option::of(0.0f64..250.0),
        activity in prop::sample::select(ActivityLevel::ALL.to_vec()),
        tier in prop::sample::select(FoodTier::ALL.to_vec()),
        custom in prop::option::of(-5.0f64..20.0),
        age in 0u8..=20,
        reimbursement in prop::sample::select(Reimbursement::ALL.to_vec()),
        deductible in prop::sample::select(Deductible::ALL.to_vec()),
        limit in prop::sample::select(AnnualLimit::ALL.to_vec()),
    ) -> ScenarioParameters {
        let mut params = ScenarioParameters {
            size,
            cost_level,
            acquisition: if buy { AcquisitionMethod::Buy } else { AcquisitionMethod::Adopt },
            include_insurance: toggles[0],
            include_training: toggles[1],
            include_treats: toggles[2],
            include_grooming: toggles[3],
            include_toys_supplies: toggles[4],
            ..ScenarioParameters::default()
        };
        params.food.weight_lbs = weight;
        params.food.activity = activity;
        params.food.price = custom.map_or(FoodPrice::Tier(tier), FoodPrice::custom);
        params.insurance.age_years = age;
        params.insurance.plan.reimbursement = reimbursement;
        params.insurance.plan.deductible = deductible;
        params.insurance.plan.annual_limit = limit;
        params
    }
}

prop_compose! {
    fn overrides_strategy()(
        entries in prop::collection::vec(
            (
                prop::sample::select(CostCategory::MONTHLY.to_vec()),
                prop_oneof![
                    (0.0f64..500.0).prop_map(|v| v.to_string()),
                    Just(String::new()),
                    Just("n/a".to_string()),
                    Just("-12".to_string()),
                ],
            ),
            0..6,
        )
    ) -> OverrideMap {
        let mut map = OverrideMap::new();
        for (category, text) in entries {
            map.set(category, text);
        }
        map
    }
}

proptest! {
    #[test]
    fn prop_totals_are_sums_of_items(params in scenario_strategy(), overrides in overrides_strategy()) {
        let b = estimate(&params, &overrides).breakdown;
        assert_consistent(&b);
    }

    #[test]
    fn prop_estimate_is_idempotent(params in scenario_strategy(), overrides in overrides_strategy()) {
        prop_assert_eq!(estimate(&params, &overrides), estimate(&params, &overrides));
    }

    #[test]
    fn prop_override_wins_everywhere(
        params in scenario_strategy(),
        category in prop::sample::select(CostCategory::MONTHLY.to_vec()),
        amount in 0.0f64..1000.0,
    ) {
        let base = estimate(&params, &OverrideMap::new()).breakdown;
        let mut overrides = OverrideMap::new();
        overrides.set(category, amount.to_string());
        let b = estimate(&params, &overrides).breakdown;
        let expected = amount.round() as u64;

        prop_assert_eq!(b.monthly_all.get(category), Some(expected));
        prop_assert_eq!(b.monthly_computed.get(category), base.monthly_computed.get(category));
        if params.is_enabled(category) {
            prop_assert_eq!(b.monthly.get(category), Some(expected));
            let computed = base.monthly.get(category).unwrap_or_default();
            prop_assert_eq!(b.summary.monthly + computed, base.summary.monthly + expected);
        } else {
            prop_assert_eq!(b.monthly.get(category), None);
            prop_assert_eq!(b.summary, base.summary);
        }

        overrides.clear(category);
        prop_assert_eq!(estimate(&params, &overrides).breakdown, base);
    }

    #[test]
    fn prop_food_cost_grows_with_weight(
        w1 in 1.0f64..200.0,
        delta in 0.01f64..100.0,
        activity in prop::sample::select(ActivityLevel::ALL.to_vec()),
        tier in prop::sample::select(FoodTier::ALL.to_vec()),
    ) {
        let light = calc_food(w1, activity.factor(), tier.price_per_lb());
        let heavy = calc_food(w1 + delta, activity.factor(), tier.price_per_lb());
        prop_assert!(heavy.monthly_cost > light.monthly_cost);
    }

    #[test]
    fn prop_premium_is_linear_in_each_plan_factor(
        age in 0u8..=20,
        size in prop::sample::select(SizeCategory::ALL.to_vec()),
        level in prop::sample::select(CostLevel::ALL.to_vec()),
        high_risk in any::<bool>(),
        scale in 0.5f64..3.0,
        which in 0usize..3,
    ) {
        let mut factors = [1.0, 1.0, 1.0];
        let base = calc_insurance_premium(age, size, level, high_risk, factors[0], factors[1], factors[2]);
        factors[which] = scale;
        let scaled = calc_insurance_premium(age, size, level, high_risk, factors[0], factors[1], factors[2]);
        prop_assert!((scaled.raw / base.raw - scale).abs() < 1e-9);
        prop_assert!(scaled.low <= scaled.estimate && scaled.estimate <= scaled.high);
    }
}

#[test]
fn every_catalog_breed_produces_a_consistent_breakdown() {
    let catalog = BreedCatalog::load_from_static();
    for breed in catalog.breeds() {
        let params = ScenarioParameters::for_breed(breed.clone());
        let b = estimate(&params, &OverrideMap::new()).breakdown;
        assert_consistent(&b);
        assert!(b.summary.monthly > 0, "{} priced at zero", breed.name_en);
    }
}
