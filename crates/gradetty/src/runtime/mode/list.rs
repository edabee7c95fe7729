use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, SupportField, Tab};
use crate::domain::input::InputState;
use crate::infra::api;
use crate::infra::clipboard;
use crate::runtime::EventResult;
use crate::runtime::mode::confirmation::DEFAULT_OPTION_INDEX;
use crate::ui::state::app_mode::{AppMode, ConfirmAction, HelpContext};
use crate::ui::state::help_action::{
    HelpAction, account_actions, analysis_list_actions, support_actions,
};
use crate::ui::state::login::LoginState;

/// Handles key input while the app is in list mode.
///
/// Pressing `q` opens a confirmation overlay instead of quitting immediately,
/// with `No` selected by default.
pub(crate) async fn handle(app: &mut App, key: KeyEvent) -> io::Result<EventResult> {
    if app.current_tab == Tab::Support && app.support.is_editing_message {
        handle_support_message_input(app, key);

        return Ok(EventResult::Continue);
    }

    match key.code {
        KeyCode::Char('q') => {
            app.mode = AppMode::Confirmation {
                action: ConfirmAction::Quit,
                confirmation_message: "Quit gradetty?".to_string(),
                confirmation_title: "Confirm Quit".to_string(),
                selected_confirmation_index: DEFAULT_OPTION_INDEX,
            };
        }
        KeyCode::Tab => {
            app.next_tab();
        }
        KeyCode::Char('a') => {
            app.mode = AppMode::UrlPrompt {
                input: InputState::new(),
            };
        }
        KeyCode::Char('j') | KeyCode::Down => match app.current_tab {
            Tab::Analyses => app.next(),
            Tab::Account => {}
            Tab::Support => app.support.select_next_field(),
        },
        KeyCode::Char('k') | KeyCode::Up => match app.current_tab {
            Tab::Analyses => app.previous(),
            Tab::Account => {}
            Tab::Support => app.support.select_previous_field(),
        },
        KeyCode::Enter => return handle_enter(app).await,
        KeyCode::Char('d') if app.current_tab == Tab::Analyses => {
            open_delete_confirmation(app);
        }
        KeyCode::Char('x') if app.current_tab == Tab::Account => {
            if app.auth.is_authenticated() {
                app.mode = AppMode::Confirmation {
                    action: ConfirmAction::Logout,
                    confirmation_message: "Sign out of your Google account?".to_string(),
                    confirmation_title: "Confirm Sign Out".to_string(),
                    selected_confirmation_index: DEFAULT_OPTION_INDEX,
                };
            }
        }
        KeyCode::Char('h') | KeyCode::Left if app.current_tab == Tab::Support => {
            app.support.decrease_amount();
        }
        KeyCode::Char('l') | KeyCode::Right if app.current_tab == Tab::Support => {
            app.support.increase_amount();
        }
        KeyCode::Char('m') if app.current_tab == Tab::Support => {
            app.support.start_message_editing();
        }
        KeyCode::Char('n') if app.current_tab == Tab::Support => {
            app.support.reset_link();
        }
        KeyCode::Char('y') if app.current_tab == Tab::Support => {
            copy_payment_link(app);
        }
        KeyCode::Char('?') => {
            open_list_help_overlay(app);
        }
        _ => {}
    }

    Ok(EventResult::Continue)
}

/// Runs the Enter action for the currently focused tab.
async fn handle_enter(app: &mut App) -> io::Result<EventResult> {
    match app.current_tab {
        Tab::Analyses => {
            let selected_id = app.selected_analysis().map(|analysis| analysis.id.clone());
            if let Some(analysis_id) = selected_id
                && let Err(err) = app.open_report(&analysis_id).await
            {
                app.show_error(err);
            }
        }
        Tab::Account => {
            if !app.auth.is_authenticated() {
                open_login(app);
            }
        }
        Tab::Support => match app.support.selected_field {
            SupportField::Message => app.support.start_message_editing(),
            SupportField::Amount | SupportField::Generate => app.generate_payment_link(),
        },
    }

    Ok(EventResult::Continue)
}

/// Handles text input while the donation message editor is active.
fn handle_support_message_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.support.stop_message_editing(),
        KeyCode::Backspace => app.support.message.delete_backward(),
        KeyCode::Delete => app.support.message.delete_forward(),
        KeyCode::Left => app.support.message.move_left(),
        KeyCode::Right => app.support.message.move_right(),
        KeyCode::Home => app.support.message.move_home(),
        KeyCode::End => app.support.message.move_end(),
        KeyCode::Char(character) if is_text_key(key) => {
            app.support.message.insert_char(character);
        }
        _ => {}
    }
}

/// Returns whether a key event should insert text into an editable field.
fn is_text_key(key: KeyEvent) -> bool {
    key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT
}

/// Opens the delete confirmation for the selected analysis, if any.
fn open_delete_confirmation(app: &mut App) {
    let selected_analysis = app
        .selected_analysis()
        .map(|analysis| (analysis.id.clone(), analysis.full_name()));
    if let Some((analysis_id, full_name)) = selected_analysis {
        app.mode = AppMode::Confirmation {
            action: ConfirmAction::DeleteAnalysis { analysis_id },
            confirmation_message: format!("Delete analysis \"{full_name}\"?"),
            confirmation_title: "Confirm Delete".to_string(),
            selected_confirmation_index: DEFAULT_OPTION_INDEX,
        };
    }
}

/// Switches to login mode with a fresh Google consent URL when configured.
fn open_login(app: &mut App) {
    let auth_url = api::google_client_id()
        .map(|client_id| api::google_auth_url(&client_id, &api::api_base_url()));

    app.mode = AppMode::Login {
        login: LoginState::new(auth_url),
    };
}

/// Copies the generated payment link to the system clipboard.
fn copy_payment_link(app: &mut App) {
    let Some(payment_url) = app
        .support
        .link
        .as_ref()
        .map(|link| link.payment_url.clone())
    else {
        return;
    };

    match clipboard::copy_text(&payment_url) {
        Ok(()) => app.show_info("Payment link copied".to_string()),
        Err(err) => app.show_error(err),
    }
}

/// Opens the help overlay with list-mode action availability projection.
fn open_list_help_overlay(app: &mut App) {
    let keybindings = list_keybindings(app);

    app.mode = AppMode::Help {
        context: HelpContext::List { keybindings },
        scroll_offset: 0,
    };
}

/// Projects current list-mode action availability into keybinding entries.
fn list_keybindings(app: &App) -> Vec<HelpAction> {
    match app.current_tab {
        Tab::Analyses => {
            let has_selected_analysis = app.selected_analysis().is_some();

            analysis_list_actions(has_selected_analysis, has_selected_analysis)
        }
        Tab::Account => account_actions(app.auth.is_authenticated()),
        Tab::Support => support_actions(app.support.link.is_some()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyModifiers;
    use tempfile::{TempDir, tempdir};

    use super::*;
    use crate::app::AppEvent;
    use crate::domain::analysis::{AnalysisResult, RepoDetails};
    use crate::infra::api::{MockGradeClient, PaymentLink};
    use crate::infra::auth_store::AuthStore;
    use crate::infra::db::Database;
    use crate::ui::state::report::ReportPane;

    async fn new_test_app() -> (App, TempDir) {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let auth_store = AuthStore::new(temp_dir.path().join("auth.json"));
        let db = Database::open_in_memory()
            .await
            .expect("failed to open in-memory db");
        let app = App::new(auth_store, Arc::new(MockGradeClient::new()), db).await;

        (app, temp_dir)
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            details: RepoDetails {
                description: None,
                forks: 0,
                language: Some("Rust".to_string()),
                name: "demo".to_string(),
                open_issues: 0,
                owner: "acme".to_string(),
                stars: 0,
            },
            file_structure: Some(vec!["src/main.rs".to_string()]),
            roadmap: Vec::new(),
            score: 61.0,
            summary: "Sample".to_string(),
            tech_stack: None,
        }
    }

    async fn new_test_app_with_analysis() -> (App, TempDir) {
        let (mut app, temp_dir) = new_test_app().await;
        app.services
            .db()
            .insert_analysis("a-1", "https://github.com/acme/demo", &sample_result())
            .await
            .expect("failed to insert analysis");
        app.services.emit_app_event(AppEvent::RefreshAnalyses);
        app.process_pending_app_events().await;

        (app, temp_dir)
    }

    fn sample_payment_link() -> PaymentLink {
        PaymentLink {
            payment_url: "https://pay.example/abc".to_string(),
            transaction_id: "txn-42".to_string(),
        }
    }

    #[tokio::test]
    async fn test_handle_quit_key_shows_confirm_quit_overlay() {
        // Arrange
        let (mut app, _temp_dir) = new_test_app().await;

        // Act
        let event_result = handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
        )
        .await
        .expect("failed to handle key");

        // Assert
        assert!(matches!(event_result, EventResult::Continue));
        assert!(matches!(
            app.mode,
            AppMode::Confirmation {
                action: ConfirmAction::Quit,
                ref confirmation_title,
                selected_confirmation_index: DEFAULT_OPTION_INDEX,
                ..
            } if confirmation_title == "Confirm Quit"
        ));
    }

    #[tokio::test]
    async fn test_handle_tab_key_cycles_tabs() {
        // Arrange
        let (mut app, _temp_dir) = new_test_app().await;

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE))
            .await
            .expect("failed to handle key");

        // Assert
        assert_eq!(app.current_tab, Tab::Account);
    }

    #[tokio::test]
    async fn test_handle_a_key_opens_url_prompt() {
        // Arrange
        let (mut app, _temp_dir) = new_test_app().await;

        // Act
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE),
        )
        .await
        .expect("failed to handle key");

        // Assert
        let AppMode::UrlPrompt { input } = &app.mode else {
            panic!("expected url prompt mode");
        };
        assert!(input.is_empty());
    }

    #[tokio::test]
    async fn test_handle_navigation_keys_move_analysis_selection() {
        // Arrange
        let (mut app, _temp_dir) = new_test_app_with_analysis().await;
        app.services
            .db()
            .insert_analysis("a-2", "https://github.com/acme/other", &sample_result())
            .await
            .expect("failed to insert analysis");
        app.services.emit_app_event(AppEvent::RefreshAnalyses);
        app.process_pending_app_events().await;
        let first_selected = app.history.table_state.selected();

        // Act
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
        )
        .await
        .expect("failed to handle key");

        // Assert
        assert_ne!(app.history.table_state.selected(), first_selected);
    }

    #[tokio::test]
    async fn test_handle_enter_opens_report_for_selected_analysis() {
        // Arrange
        let (mut app, _temp_dir) = new_test_app_with_analysis().await;

        // Act
        let event_result = handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .await
            .expect("failed to handle key");

        // Assert
        assert!(matches!(event_result, EventResult::Continue));
        let AppMode::Report { report } = &app.mode else {
            panic!("expected report mode");
        };
        assert_eq!(report.analysis_id, "a-1");
        assert_eq!(report.pane, ReportPane::Overview);
    }

    #[tokio::test]
    async fn test_handle_delete_key_opens_delete_confirmation() {
        // Arrange
        let (mut app, _temp_dir) = new_test_app_with_analysis().await;

        // Act
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
        )
        .await
        .expect("failed to handle key");

        // Assert
        assert!(matches!(
            app.mode,
            AppMode::Confirmation {
                action: ConfirmAction::DeleteAnalysis { ref analysis_id },
                ref confirmation_message,
                ..
            } if analysis_id == "a-1" && confirmation_message.contains("acme/demo")
        ));
    }

    #[tokio::test]
    async fn test_handle_delete_key_without_selection_keeps_list_mode() {
        // Arrange
        let (mut app, _temp_dir) = new_test_app().await;

        // Act
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
        )
        .await
        .expect("failed to handle key");

        // Assert
        assert!(matches!(app.mode, AppMode::List));
    }

    #[tokio::test]
    async fn test_handle_enter_on_account_tab_opens_login() {
        // Arrange
        let (mut app, _temp_dir) = new_test_app().await;
        app.current_tab = Tab::Account;

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .await
            .expect("failed to handle key");

        // Assert
        assert!(matches!(app.mode, AppMode::Login { .. }));
    }

    #[tokio::test]
    async fn test_handle_enter_on_account_tab_ignored_while_signed_in() {
        // Arrange
        let (mut app, _temp_dir) = new_test_app().await;
        app.current_tab = Tab::Account;
        app.auth.apply_login("token-1".to_string(), None);

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .await
            .expect("failed to handle key");

        // Assert
        assert!(matches!(app.mode, AppMode::List));
    }

    #[tokio::test]
    async fn test_handle_x_key_confirms_sign_out_only_when_signed_in() {
        // Arrange
        let (mut app, _temp_dir) = new_test_app().await;
        app.current_tab = Tab::Account;

        // Act
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE),
        )
        .await
        .expect("failed to handle key");

        // Assert
        assert!(matches!(app.mode, AppMode::List));

        // Arrange
        app.auth.apply_login("token-1".to_string(), None);

        // Act
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE),
        )
        .await
        .expect("failed to handle key");

        // Assert
        assert!(matches!(
            app.mode,
            AppMode::Confirmation {
                action: ConfirmAction::Logout,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_handle_amount_keys_step_donation_amount() {
        // Arrange
        let (mut app, _temp_dir) = new_test_app().await;
        app.current_tab = Tab::Support;
        let initial_amount = app.support.amount;

        // Act
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
        )
        .await
        .expect("failed to handle key");
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
        )
        .await
        .expect("failed to handle key");
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
        )
        .await
        .expect("failed to handle key");

        // Assert
        assert!(app.support.amount > initial_amount);
    }

    #[tokio::test]
    async fn test_handle_enter_on_message_field_starts_editing() {
        // Arrange
        let (mut app, _temp_dir) = new_test_app().await;
        app.current_tab = Tab::Support;
        app.support.select_next_field();
        assert_eq!(app.support.selected_field, SupportField::Message);

        // Act
        handle(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .await
            .expect("failed to handle key");

        // Assert
        assert!(app.support.is_editing_message);
    }

    #[tokio::test]
    async fn test_handle_message_editing_captures_navigation_keys() {
        // Arrange
        let (mut app, _temp_dir) = new_test_app().await;
        app.current_tab = Tab::Support;
        app.support.start_message_editing();

        // Act
        for character in "jkq".chars() {
            handle(
                &mut app,
                KeyEvent::new(KeyCode::Char(character), KeyModifiers::NONE),
            )
            .await
            .expect("failed to handle key");
        }
        handle(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))
            .await
            .expect("failed to handle key");

        // Assert
        assert!(matches!(app.mode, AppMode::List));
        assert!(!app.support.is_editing_message);
        assert_eq!(app.support.message.text(), "jkq");
    }

    #[tokio::test]
    async fn test_handle_n_key_resets_payment_link() {
        // Arrange
        let (mut app, _temp_dir) = new_test_app().await;
        app.current_tab = Tab::Support;
        app.support.apply_payment_link(sample_payment_link());
        assert!(app.support.link.is_some());

        // Act
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
        )
        .await
        .expect("failed to handle key");

        // Assert
        assert!(app.support.link.is_none());
    }

    #[tokio::test]
    async fn test_handle_help_key_opens_tab_specific_help() {
        // Arrange
        let (mut app, _temp_dir) = new_test_app().await;
        app.current_tab = Tab::Support;

        // Act
        handle(
            &mut app,
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
        )
        .await
        .expect("failed to handle key");

        // Assert
        let AppMode::Help {
            context: HelpContext::List { keybindings },
            scroll_offset: 0,
        } = &app.mode
        else {
            panic!("expected help mode");
        };
        assert_eq!(keybindings, &support_actions(false));
    }
}
