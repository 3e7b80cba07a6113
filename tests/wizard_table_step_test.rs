use compat_base::cli::tui::wizard::{
    ChoiceStep, ChoiceStepParams, Step, StepKind, StepResult, StepSignal, TableColumn,
    TableResult, TableStep, TableStepParams, WizardEvent,
};
use ratatui::crossterm::event::KeyCode;

fn metric_table() -> TableStep {
    TableStep::new(TableStepParams {
        order: 2,
        header: String::new(),
        columns: vec![
            TableColumn::new("Metric", 10),
            TableColumn::new("Spec", 6),
            TableColumn::new("Impl", 6),
        ],
        rows: vec![vec!["License".to_string(), "MIT".to_string(), "MIT".to_string()]],
    })
}

#[test]
fn test_render_lays_out_columns_in_order() {
    let table = metric_table();
    let view = table.render();
    let lines: Vec<&str> = view.lines().collect();

    assert_eq!(lines[0], " Metric      Spec    Impl");
    assert_eq!(lines[1], "─".repeat(28));
    assert_eq!(lines[2], " License     MIT     MIT");
    assert_eq!(lines.last(), Some(&"(press enter to continue)"));

    let metric = lines[0].find("Metric").unwrap();
    let spec = lines[0].find("Spec").unwrap();
    let imp = lines[0].find("Impl").unwrap();
    assert!(metric < spec && spec < imp);
    // each cell is its width plus one space on either side
    assert_eq!(spec - metric, 12);
    assert_eq!(imp - spec, 8);
}

#[test]
fn test_render_ignores_choice_state() {
    let table = metric_table();
    let before = table.render();

    let choice = ChoiceStep::new(ChoiceStepParams {
        order: 1,
        options: vec!["A".to_string(), "B".to_string()],
        ..Default::default()
    });
    let (choice, _) = choice.update(&WizardEvent::key(KeyCode::Down));
    let _ = choice.update(&WizardEvent::key(KeyCode::Enter));

    assert_eq!(table.render(), before);
}

#[test]
fn test_long_cells_are_truncated() {
    let table = TableStep::new(TableStepParams {
        order: 2,
        columns: vec![TableColumn::new("Value", 5)],
        rows: vec![vec!["Loading...".to_string()]],
        ..Default::default()
    });

    let view = table.render();
    assert!(view.lines().any(|l| l == " Load…"));
}

#[test]
fn test_header_is_rendered_first() {
    let table = TableStep::new(TableStepParams {
        order: 2,
        header: "Report".to_string(),
        columns: vec![TableColumn::new("A", 3)],
        rows: vec![],
    });
    assert!(table.render().starts_with("Report\n\n A"));
}

#[test]
fn test_navigation_keys_advance() {
    let table = metric_table();
    for code in [KeyCode::Enter, KeyCode::Down, KeyCode::Up, KeyCode::Char('j'), KeyCode::Char('k')] {
        assert_eq!(table.signal(&WizardEvent::key(code)), StepSignal::Advance, "{:?}", code);
    }
}

#[test]
fn test_quit_keys_quit() {
    let table = metric_table();
    assert_eq!(table.signal(&WizardEvent::key(KeyCode::Char('q'))), StepSignal::Quit);
    assert_eq!(table.signal(&WizardEvent::key(KeyCode::Esc)), StepSignal::Quit);
    assert_eq!(table.signal(&WizardEvent::ctrl('c')), StepSignal::Quit);
}

#[test]
fn test_other_input_continues() {
    let table = metric_table();
    assert_eq!(table.signal(&WizardEvent::key(KeyCode::Char('x'))), StepSignal::Continue);
    assert_eq!(table.signal(&WizardEvent::Tick), StepSignal::Continue);
    assert_eq!(table.signal(&WizardEvent::Resize(10, 10)), StepSignal::Continue);
}

#[test]
fn test_handle_input_keeps_contents() {
    let table = metric_table();
    let (next, signal) = table.handle_input(&WizardEvent::key(KeyCode::Enter));

    assert_eq!(signal, StepSignal::Advance);
    assert_eq!(next.kind(), StepKind::Table);
    assert_eq!(next.order(), 2);
    assert_eq!(next.render(), table.render());
}

#[test]
fn test_result_is_empty_marker() {
    assert_eq!(metric_table().result(), StepResult::Table(TableResult {}));
}
