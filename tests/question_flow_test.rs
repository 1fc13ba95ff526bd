//! Question flow: validation, answers, server errors, Enter key

mod common;

use anyhow::anyhow;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use common::{answer, failure, Call, FakeService};
use docqa::controller::ASK_FAILED;
use docqa::handlers::keyboard::handle_key;
use docqa::handlers::UiEvent;
use docqa::messages::Flow;
use docqa::model::{Region, Severity};

fn revealed_controller(service: &std::sync::Arc<FakeService>) -> docqa::controller::Controller {
    let mut controller = common::controller(service, false);
    controller.page.question.visible = true;
    controller
}

/// Test: Whitespace-only question never reaches the server
#[tokio::test]
async fn test_blank_question_is_rejected() {
    let service = FakeService::new();
    let mut controller = revealed_controller(&service);
    controller.page.question.input.set_value("   \t ");

    controller.ask();

    let alert = &controller.page.question.alert;
    assert_eq!(alert.text(), "Please enter a question");
    assert_eq!(alert.severity(), Some(Severity::Error));
    assert!(!controller.page.question.loading);

    tokio::task::yield_now().await;
    assert_eq!(service.call_count(), 0);
}

/// Test: Answer is shown verbatim and replaces the previous one
#[tokio::test]
async fn test_answer_replaces_previous() {
    let service = FakeService::new();
    service.script_ask(Ok(answer("First answer")));
    service.script_ask(Ok(answer("  Second answer,\nverbatim  ")));
    let mut controller = revealed_controller(&service);

    controller.page.question.input.set_value("  What is X?  ");
    controller.ask();
    assert!(controller.page.question.loading);
    assert!(!controller.page.question.answer_visible);
    controller.process_next().await;
    assert_eq!(controller.page.question.answer, "First answer");

    controller.ask();
    assert!(
        !controller.page.question.answer_visible,
        "previous answer hidden while asking"
    );
    controller.process_next().await;

    let question = &controller.page.question;
    assert!(question.answer_visible);
    assert_eq!(question.answer, "  Second answer,\nverbatim  ");
    assert!(!question.loading);
    assert_eq!(
        service.calls(),
        vec![
            Call::Ask("What is X?".to_string()),
            Call::Ask("What is X?".to_string())
        ]
    );
}

/// Test: Server error goes to the question alert, answer stays hidden
#[tokio::test]
async fn test_ask_rejected_shows_server_error() {
    let service = FakeService::new();
    service.script_ask(Ok(failure(400, "No document uploaded")));
    let mut controller = revealed_controller(&service);

    controller.page.question.input.set_value("Why?");
    controller.ask();
    controller.process_next().await;

    let question = &controller.page.question;
    assert_eq!(question.alert.text(), "No document uploaded");
    assert_eq!(question.alert.severity(), Some(Severity::Error));
    assert!(!question.answer_visible);
    assert!(!question.loading);
}

/// Test: Transport failure shows the generic message
#[tokio::test]
async fn test_ask_transport_error_is_generic() {
    let service = FakeService::new();
    service.script_ask(Err(anyhow!("operation timed out")));
    let mut controller = revealed_controller(&service);

    controller.page.question.input.set_value("Why?");
    controller.ask();
    controller.process_next().await;

    assert_eq!(controller.page.question.alert.text(), ASK_FAILED);
    assert!(!controller.page.question.loading);
    assert!(!controller.is_busy(Flow::Ask));
}

/// Test: Enter in the question field behaves like clicking Ask
#[tokio::test]
async fn test_enter_matches_ask_click() {
    let clicked = FakeService::new();
    clicked.script_ask(Ok(answer("X is a thing")));
    let mut by_click = revealed_controller(&clicked);
    by_click.page.question.input.set_value("What is X?");
    common::bindings(false).dispatch(&mut by_click, Region::AskButton, &UiEvent::Click);
    by_click.process_next().await;

    let pressed = FakeService::new();
    pressed.script_ask(Ok(answer("X is a thing")));
    let mut by_enter = revealed_controller(&pressed);
    by_enter.page.question.input.set_value("What is X?");
    by_enter.page.focus = Region::QuestionInput;
    handle_key(
        &mut by_enter,
        &common::bindings(false),
        KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
    );
    by_enter.process_next().await;

    assert_eq!(clicked.calls(), pressed.calls());
    assert_eq!(by_click.page.question.answer, by_enter.page.question.answer);
    assert_eq!(
        by_click.page.question.answer_visible,
        by_enter.page.question.answer_visible
    );
}

/// Test: Typing into the focused field edits the question
#[tokio::test]
async fn test_typing_fills_question() {
    let service = FakeService::new();
    let mut controller = revealed_controller(&service);
    controller.page.focus = Region::QuestionInput;
    let bindings = common::bindings(false);

    for c in "Hi?".chars() {
        handle_key(
            &mut controller,
            &bindings,
            KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE),
        );
    }

    assert_eq!(controller.page.question.input.value(), "Hi?");
    assert_eq!(service.call_count(), 0);
}
