pub mod breed_select;
pub mod cost_detail;
pub mod cost_lists;
pub mod cost_summary;
pub mod feedback_form;
pub mod food_editor;
pub mod footer;
pub mod insurance_editor;
pub mod nav_link;
pub mod navbar;
pub mod override_editor;
pub mod pie_chart;
pub mod scenario_controls;
