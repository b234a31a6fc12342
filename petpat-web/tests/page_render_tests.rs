use futures::executor::block_on;
use petpat_core::{BreedCatalog, CostCategory, EstimatorSession, Lang, SessionAction, WeightUnit};
use petpat_web::pages::{
    calculator::{CalculatorPage, CalculatorPageProps, Stage},
    home::{HomePage, HomePageProps},
    method::{MethodPage, MethodPageProps},
    not_found::{NotFound, Props as NotFoundProps},
};
use yew::{Callback, LocalServerRenderer};

fn calculator(lang: Lang, unit: WeightUnit, session: EstimatorSession) -> String {
    block_on(
        LocalServerRenderer::<CalculatorPage>::with_props(CalculatorPageProps {
            lang,
            weight_unit: unit,
            initial_stage: Stage::Estimate,
            initial_session: session,
        })
        .render(),
    )
}

#[test]
fn home_page_links_into_the_calculator() {
    petpat_web::i18n::set_lang("en");
    let html = block_on(
        LocalServerRenderer::<HomePage>::with_props(HomePageProps {
            lang: Lang::En,
            on_navigate: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("real cost"));
    assert!(html.contains("href=\"/calculator\""));
    assert!(html.contains("Three steps"));
}

#[test]
fn home_page_in_chinese() {
    petpat_web::i18n::set_lang("zh");
    let html = block_on(
        LocalServerRenderer::<HomePage>::with_props(HomePageProps {
            lang: Lang::Zh,
            on_navigate: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("真实花费"));
    assert!(html.contains("lang=\"zh-CN\""));
}

#[test]
fn calculator_reflects_a_selected_breed() {
    petpat_web::i18n::set_lang("en");
    let catalog = BreedCatalog::load_from_static();
    let golden = catalog.find("Golden Retriever").cloned().unwrap();
    let mut session = EstimatorSession::new();
    session.apply(SessionAction::SelectBreed { breed: golden });
    let expected = petpat_web::i18n::fmt_usd(session.breakdown().summary.monthly);

    let html = calculator(Lang::En, WeightUnit::Lbs, session);
    assert!(html.contains("Golden Retriever"));
    assert!(html.contains(&expected));
    assert!(html.contains("Change breed"));
}

#[test]
fn enabling_insurance_moves_the_headline_total() {
    petpat_web::i18n::set_lang("en");
    let mut session = EstimatorSession::new();
    session.apply(SessionAction::SetEnabled {
        category: CostCategory::Insurance,
        enabled: true,
    });
    let monthly = session.breakdown().summary.monthly;
    assert!(monthly > 172);
    let html = calculator(Lang::En, WeightUnit::Lbs, session);
    assert!(html.contains(&petpat_web::i18n::fmt_usd(monthly)));
}

#[test]
fn insurance_detail_renders_plan_controls_in_kg_mode() {
    petpat_web::i18n::set_lang("en");
    let mut session = EstimatorSession::new();
    session.apply(SessionAction::OpenDetail {
        category: CostCategory::Insurance,
    });
    let html = calculator(Lang::En, WeightUnit::Kg, session);
    assert!(html.contains("Reimbursement"));
    assert!(html.contains("How this premium is built"));
    assert!(html.contains("switched off"));
}

#[test]
fn method_page_has_feedback_form() {
    petpat_web::i18n::set_lang("en");
    let html = block_on(
        LocalServerRenderer::<MethodPage>::with_props(MethodPageProps { lang: Lang::En }).render(),
    );
    assert!(html.contains("How we calculate"));
    assert!(html.contains("Limitations"));
    assert!(html.contains("fb-summary"));
}

#[test]
fn not_found_page_offers_a_way_home() {
    petpat_web::i18n::set_lang("en");
    let html = block_on(
        LocalServerRenderer::<NotFound>::with_props(NotFoundProps {
            on_go_home: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("Page not found"));
    assert!(html.contains("Back to home"));
}
