//! Integration tests for the projection flow.
//!
//! These tests verify the end-to-end path:
//! 1. Configuration is parsed and validated
//! 2. The query handler validates business inputs and runs every scenario
//! 3. The report honours the model's invariants
//! 4. The report renders to JSON and YAML

use roi_projection::adapters::render_report;
use roi_projection::application::{GenerateProjectionHandler, GenerateProjectionQuery};
use roi_projection::config::{AppConfig, ReportFormat};
use roi_projection::domain::foundation::{ErrorCode, Percentage};
use roi_projection::domain::projection::{
    BusinessInputs, Payback, ProjectionEngine, RawBusinessInputs, DAYS_PER_MONTH,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn handler_from(config: &AppConfig) -> GenerateProjectionHandler {
    config.validate().expect("config should be valid");
    GenerateProjectionHandler::from_settings(config.model.to_settings().unwrap()).unwrap()
}

fn config_query(config: &AppConfig) -> GenerateProjectionQuery {
    GenerateProjectionQuery {
        inputs: config.inputs.into(),
    }
}

fn sample_query() -> GenerateProjectionQuery {
    GenerateProjectionQuery {
        inputs: RawBusinessInputs {
            aov: 28.0,
            conversion_rate: 1.5,
            daily_orders: 27.0,
            current_visibility: 33.0,
        },
    }
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn default_configuration_projects_sample_business() {
    let config = AppConfig::from_toml_str("").unwrap();
    let report = handler_from(&config).handle(config_query(&config)).unwrap();

    assert_eq!(report.program_cost, 5550.0);
    assert_eq!(report.ramp_months, 3);
    assert!((report.baseline.visitors_today - 1800.0).abs() < 1e-9);
    assert!((report.baseline.orders_today - 810.0).abs() < 1e-9);

    let expected = [
        ("Conservative", 50.0, 19_692.65),
        ("Baseline", 65.0, 37_068.52),
        ("Aggressive", 75.0, 48_652.43),
    ];
    for (projection, (label, target, revenue)) in report.scenarios.iter().zip(expected) {
        assert_eq!(projection.label, label);
        assert_eq!(projection.scenario.target_visibility, target);
        assert!((projection.scenario.extra_revenue_per_month - revenue).abs() < 1e-1);
    }
}

#[test]
fn report_honours_ramp_invariants() {
    let report = GenerateProjectionHandler::new(ProjectionEngine::default())
        .handle(sample_query())
        .unwrap();

    for projection in &report.scenarios {
        let ramp = &projection.ramp;
        let last = ramp.final_month().unwrap();

        assert_eq!(ramp.months.len(), 3);
        assert_eq!(last.visibility, projection.scenario.target_visibility);
        assert_eq!(last.extra_revenue, projection.scenario.extra_revenue_per_month);

        let sum: f64 = ramp.months.iter().map(|m| m.extra_revenue).sum();
        assert_eq!(ramp.total_extra_revenue, sum);

        let month1 = ramp.months[0].extra_revenue;
        if month1 >= report.program_cost {
            let expected = DAYS_PER_MONTH * report.program_cost / month1;
            assert!((ramp.payback.days().unwrap() - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn baseline_month_one_visibility_is_one_third_of_the_way() {
    let inputs = BusinessInputs::new(28.0, 1.5, 27.0, 33.0).unwrap();
    let ramp = ProjectionEngine::default()
        .ramp(Percentage::new(65.0), &inputs)
        .unwrap();

    assert!((ramp.months[0].visibility - (33.0 + 32.0 / 3.0)).abs() < 1e-9);
    assert!(ramp.months[0].extra_revenue > 5550.0);
    assert!(matches!(ramp.payback, Payback::Reached { days } if days < 30.0));
}

#[test]
fn configured_scenarios_and_cost_flow_through() {
    let config = AppConfig::from_toml_str(
        r#"
[model]
program_cost = 9000
ramp_months = 6

[[model.scenarios]]
label = "Stretch"
target_visibility = 85

[inputs]
aov = 20
conversion_rate = 2
daily_orders = 5
current_visibility = 33
"#,
    )
    .unwrap();

    let report = handler_from(&config).handle(config_query(&config)).unwrap();

    assert_eq!(report.program_cost, 9000.0);
    assert_eq!(report.scenarios.len(), 1);
    let stretch = report.find("Stretch").unwrap();
    assert_eq!(stretch.ramp.months.len(), 6);
    assert_eq!(stretch.ramp.final_month().unwrap().visibility, 85.0);
}

#[test]
fn invalid_inputs_are_rejected_with_codes() {
    let handler = GenerateProjectionHandler::new(ProjectionEngine::default());

    let mut query = sample_query();
    query.inputs.conversion_rate = 0.0;
    assert_eq!(handler.handle(query).unwrap_err().code(), ErrorCode::InvalidInput);

    let mut query = sample_query();
    query.inputs.current_visibility = 140.0;
    assert_eq!(handler.handle(query).unwrap_err().code(), ErrorCode::OutOfRange);

    let mut query = sample_query();
    query.inputs.daily_orders = f64::NAN;
    assert_eq!(handler.handle(query).unwrap_err().code(), ErrorCode::NotFinite);
}

#[test]
fn never_profitable_target_reports_unreached_not_zero() {
    let handler = GenerateProjectionHandler::new(ProjectionEngine::default());
    let mut query = sample_query();
    query.inputs.current_visibility = 60.0;

    let report = handler.handle(query).unwrap();
    let conservative = report.find("Conservative").unwrap();

    assert!(conservative.scenario.extra_revenue_per_month < 0.0);
    assert_eq!(conservative.ramp.payback, Payback::Unreached);
    assert_eq!(conservative.ramp.payback.days(), None);
}

#[test]
fn report_renders_in_both_formats() {
    let report = GenerateProjectionHandler::new(ProjectionEngine::default())
        .handle(sample_query())
        .unwrap();

    let json = render_report(&report, ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["scenarios"][1]["label"], "Baseline");
    assert_eq!(value["scenarios"][1]["ramp"]["payback"]["status"], "reached");

    let yaml = render_report(&report, ReportFormat::Yaml).unwrap();
    assert!(yaml.contains("label: Aggressive"));
}
