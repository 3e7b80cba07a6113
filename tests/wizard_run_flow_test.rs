use compat_base::cli::commands::run::{build_orchestrator, default_impl_header, spec_header};
use compat_base::cli::tui::wizard::{app::draw, Command, StepKind, TableStep, WizardEvent};
use compat_base::config::{Config, Repository};
use ratatui::{backend::TestBackend, buffer::Buffer, crossterm::event::KeyCode, Terminal};

fn config() -> Config {
    let mut config = Config::default();
    config.implementations = vec![
        Repository::new("graphql-go", "https://github.com/graphql-go/graphql"),
        Repository::new("gqlgen", "https://github.com/99designs/gqlgen"),
    ];
    config
}

fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_choice_screen_lists_implementations() {
    let orchestrator = build_orchestrator(&config()).unwrap();
    let view = orchestrator.view();

    assert!(view.starts_with("Reference Implementation: https://github.com/graphql/graphql-js"));
    assert!(view.contains("(•) https://github.com/graphql-go/graphql"));
    assert!(view.contains("( ) https://github.com/99designs/gqlgen"));
}

#[test]
fn test_confirming_choice_rebuilds_report() {
    let mut orchestrator = build_orchestrator(&config()).unwrap();

    orchestrator.update(WizardEvent::key(KeyCode::Char('j')));
    assert_eq!(
        orchestrator.update(WizardEvent::key(KeyCode::Enter)),
        Command::None
    );

    assert_eq!(orchestrator.active_step().kind(), StepKind::Table);
    assert!(orchestrator.error().is_none());

    // the chosen url replaces the default implementation header
    let view = orchestrator.view();
    assert!(view.contains(" https://github… "));
    assert!(!view.contains("Impl: https://"));
    assert!(view.contains("Specification Version"));

    let bundle = orchestrator.finish().unwrap();
    assert_eq!(bundle.choice(), Some("https://github.com/99designs/gqlgen"));
}

#[test]
fn test_report_before_choice_uses_default_headers() {
    let config = config();
    assert_eq!(spec_header(&config), "Spec: https://github.com/graphql/graphql-js");
    assert_eq!(
        default_impl_header(&config),
        "Impl: https://github.com/graphql-go/graphql"
    );

    let orchestrator = build_orchestrator(&config).unwrap();
    let report = orchestrator
        .sequence()
        .iter()
        .find(|s| s.kind() == StepKind::Table)
        .map(|s| s.render())
        .unwrap();
    // value columns are 15 wide, so long urls are cut short
    assert!(report.contains("Spec: https://…"));
}

#[test]
fn test_quit_from_report_ends_run() {
    let mut orchestrator = build_orchestrator(&config()).unwrap();
    orchestrator.update(WizardEvent::key(KeyCode::Enter));

    assert_eq!(
        orchestrator.update(WizardEvent::key(KeyCode::Esc)),
        Command::Quit
    );
    let bundle = orchestrator.finish().unwrap();
    assert_eq!(bundle.choice(), Some("https://github.com/graphql-go/graphql"));
}

#[test]
fn test_draw_renders_active_step_in_frame() {
    let mut config = config();
    config.style.width = 60;
    let orchestrator = build_orchestrator(&config).unwrap();

    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal.draw(|frame| draw(frame, &orchestrator)).unwrap();

    let text = buffer_text(terminal.backend().buffer());
    let lines: Vec<&str> = text.lines().collect();

    // bordered block, limited to the style width
    assert!(lines[0].starts_with('┌'));
    assert_eq!(lines[0].chars().nth(59), Some('┐'));
    assert!(text.contains("(•) https://github.com/graphql-go/graphql"));
    assert!(text.contains("(press enter to continue)"));
}

#[test]
fn test_report_table_is_a_table_step() {
    let table: TableStep = compat_base::cli::tui::wizard::report::compat_table(
        &config().report,
        "Spec",
        "Impl",
    );
    assert_eq!(table.columns().len(), 6);
}
