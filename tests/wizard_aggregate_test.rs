use compat_base::cli::tui::wizard::{
    aggregate, ChoiceResult, ChoiceStep, ChoiceStepParams, ResultBundle, Step, StepSequence,
    TableColumn, TableResult, TableStep, TableStepParams,
};
use pretty_assertions::assert_eq;

fn selected_choice(label: &str) -> Box<dyn Step> {
    Box::new(ChoiceStep::new(ChoiceStepParams {
        order: 1,
        options: vec![label.to_string()],
        choice: Some(label.to_string()),
        ..Default::default()
    }))
}

fn empty_table() -> Box<dyn Step> {
    Box::new(TableStep::new(TableStepParams {
        order: 2,
        columns: vec![TableColumn::new("Metric", 10)],
        ..Default::default()
    }))
}

#[test]
fn test_bundle_has_choice_and_table_slots() {
    let sequence = StepSequence::new(vec![selected_choice("X"), empty_table()]).unwrap();
    let bundle = aggregate(&sequence).unwrap();

    assert_eq!(
        bundle,
        ResultBundle {
            choice: Some(ChoiceResult {
                choice: Some("X".to_string())
            }),
            table: Some(TableResult {}),
        }
    );
    assert_eq!(bundle.choice(), Some("X"));
}

#[test]
fn test_iteration_order_does_not_matter() {
    let forward = StepSequence::new(vec![selected_choice("X"), empty_table()]).unwrap();
    let backward = StepSequence::new(vec![empty_table(), selected_choice("X")]).unwrap();

    assert_eq!(aggregate(&forward).unwrap(), aggregate(&backward).unwrap());
}

#[test]
fn test_missing_kinds_leave_slots_empty() {
    let sequence = StepSequence::new(vec![empty_table()]).unwrap();
    let bundle = aggregate(&sequence).unwrap();

    assert_eq!(bundle.choice, None);
    assert_eq!(bundle.table, Some(TableResult {}));
    assert_eq!(bundle.choice(), None);
}

#[test]
fn test_bundle_serializes_to_json() {
    let sequence = StepSequence::new(vec![selected_choice("X"), empty_table()]).unwrap();
    let bundle = aggregate(&sequence).unwrap();

    let json = serde_json::to_value(&bundle).unwrap();
    assert_eq!(json["choice"]["choice"], "X");
    assert_eq!(json["table"], serde_json::json!({}));
}

#[test]
fn test_absent_table_serializes_to_null() {
    let sequence = StepSequence::new(vec![selected_choice("X")]).unwrap();
    let bundle = aggregate(&sequence).unwrap();

    let json = serde_json::to_value(&bundle).unwrap();
    assert!(json["table"].is_null());
    assert!(json["choice"].is_object());
}
