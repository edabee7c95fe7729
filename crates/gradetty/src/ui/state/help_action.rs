use super::report::ReportPane;

/// One user-visible shortcut entry that can be rendered in the footer and
/// in the help popup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HelpAction {
    pub(crate) footer_label: &'static str,
    pub(crate) key: &'static str,
    pub(crate) popup_label: &'static str,
}

impl HelpAction {
    /// Creates one help action descriptor.
    pub(crate) const fn new(
        footer_label: &'static str,
        key: &'static str,
        popup_label: &'static str,
    ) -> Self {
        Self {
            footer_label,
            key,
            popup_label,
        }
    }
}

/// Returns help actions for the Analyses tab in list mode.
/// These entries are used by the help overlay and include all available
/// actions.
pub(crate) fn analysis_list_actions(
    can_delete_selected_analysis: bool,
    can_open_selected_analysis: bool,
) -> Vec<HelpAction> {
    let mut actions = list_base_actions();

    if can_delete_selected_analysis {
        actions.push(HelpAction::new("delete", "d", "Delete analysis"));
    }

    if can_open_selected_analysis {
        actions.push(HelpAction::new("open", "Enter", "Open report"));
    }

    actions.push(HelpAction::new("nav", "j/k", "Navigate analyses"));
    actions.push(HelpAction::new("next tab", "Tab", "Switch tab"));
    actions.push(HelpAction::new("help", "?", "Help"));

    actions
}

/// Returns compact Analyses footer actions for the page-level hint line.
pub(crate) fn analysis_list_footer_actions(can_open_selected_analysis: bool) -> Vec<HelpAction> {
    let mut actions = list_base_actions();

    if can_open_selected_analysis {
        actions.push(HelpAction::new("open", "Enter", "Open report"));
    }

    actions.push(HelpAction::new("nav", "j/k", "Navigate analyses"));
    actions.push(HelpAction::new("next tab", "Tab", "Switch tab"));
    actions.push(HelpAction::new("help", "?", "Help"));

    actions
}

/// Returns help actions for the Account tab.
/// These entries are used by the help overlay and include all available
/// actions.
pub(crate) fn account_actions(is_authenticated: bool) -> Vec<HelpAction> {
    let mut actions = list_base_actions();

    if is_authenticated {
        actions.push(HelpAction::new("sign out", "x", "Sign out"));
    } else {
        actions.push(HelpAction::new("sign in", "Enter", "Sign in with Google"));
    }

    actions.push(HelpAction::new("next tab", "Tab", "Switch tab"));
    actions.push(HelpAction::new("help", "?", "Help"));

    actions
}

/// Returns compact Account footer actions for the page-level hint line.
pub(crate) fn account_footer_actions(is_authenticated: bool) -> Vec<HelpAction> {
    account_actions(is_authenticated)
}

/// Returns help actions for the Support tab.
/// These entries are used by the help overlay and include all available
/// actions.
pub(crate) fn support_actions(has_payment_link: bool) -> Vec<HelpAction> {
    let mut actions = list_base_actions();
    actions.push(HelpAction::new("field", "j/k", "Select field"));
    actions.push(HelpAction::new("amount", "h/l", "Adjust amount"));
    actions.push(HelpAction::new("message", "m", "Edit message"));
    actions.push(HelpAction::new("generate", "Enter", "Generate payment link"));

    if has_payment_link {
        actions.push(HelpAction::new("new code", "n", "Generate new code"));
        actions.push(HelpAction::new("copy", "y", "Copy payment link"));
    }

    actions.push(HelpAction::new("next tab", "Tab", "Switch tab"));
    actions.push(HelpAction::new("help", "?", "Help"));

    actions
}

/// Returns compact Support footer actions for the page-level hint line.
pub(crate) fn support_footer_actions(has_payment_link: bool) -> Vec<HelpAction> {
    let mut actions = vec![
        HelpAction::new("quit", "q", "Quit"),
        HelpAction::new("field", "j/k", "Select field"),
        HelpAction::new("amount", "h/l", "Adjust amount"),
        HelpAction::new("generate", "Enter", "Generate payment link"),
    ];

    if has_payment_link {
        actions.push(HelpAction::new("copy", "y", "Copy payment link"));
    }

    actions.push(HelpAction::new("next tab", "Tab", "Switch tab"));
    actions.push(HelpAction::new("help", "?", "Help"));

    actions
}

/// Projects currently available report actions into help entries.
/// These entries are used by the help overlay and include all available
/// actions.
pub(crate) fn report_actions(pane: ReportPane, can_email_report: bool) -> Vec<HelpAction> {
    let mut actions = vec![
        HelpAction::new("back", "q/Esc", "Back to list"),
        HelpAction::new("pane", "Tab", "Next pane"),
    ];

    match pane {
        ReportPane::Overview => {
            actions.push(HelpAction::new("scroll", "j/k", "Scroll overview"));
        }
        ReportPane::Files => {
            actions.push(HelpAction::new("select", "j/k", "Select entry"));
            actions.push(HelpAction::new("toggle", "Enter/Space", "Open or close folder"));
        }
        ReportPane::Roadmap => {
            actions.push(HelpAction::new("select", "j/k", "Select roadmap item"));
        }
    }

    if can_email_report {
        actions.push(HelpAction::new("email", "e", "Email PDF report"));
    }

    actions.push(HelpAction::new("help", "?", "Help"));

    actions
}

/// Returns compact report footer actions for the page-level hint line.
pub(crate) fn report_footer_actions(pane: ReportPane, can_email_report: bool) -> Vec<HelpAction> {
    report_actions(pane, can_email_report)
}

/// Renders one-line footer help text from projected actions.
pub(crate) fn footer_text(actions: &[HelpAction]) -> String {
    let mut help_text = String::new();

    for (index, action) in actions.iter().enumerate() {
        if index > 0 {
            help_text.push_str(" | ");
        }

        help_text.push_str(action.key);
        help_text.push_str(": ");
        help_text.push_str(action.footer_label);
    }

    help_text
}

/// Returns list-mode actions that are shared by all three tabs.
///
/// The `"a"` shortcut opens the repository URL prompt.
fn list_base_actions() -> Vec<HelpAction> {
    vec![
        HelpAction::new("quit", "q", "Quit"),
        HelpAction::new("analyze", "a", "Analyze a repository"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_list_actions_hide_enter_without_openable_analysis() {
        // Arrange
        // Act
        let actions = analysis_list_actions(false, false);

        // Assert
        assert!(!actions.iter().any(|action| action.key == "Enter"));
        assert!(!actions.iter().any(|action| action.key == "d"));
        assert!(actions.iter().any(|action| action.key == "j/k"));
    }

    #[test]
    fn test_analysis_list_footer_actions_hide_delete() {
        // Arrange

        // Act
        let actions = analysis_list_footer_actions(true);

        // Assert
        assert!(actions.iter().any(|action| action.key == "Enter"));
        assert!(!actions.iter().any(|action| action.key == "d"));
    }

    #[test]
    fn test_account_actions_switch_between_sign_in_and_sign_out() {
        // Act
        let signed_out = account_actions(false);
        let signed_in = account_actions(true);

        // Assert
        assert!(signed_out.iter().any(|action| action.key == "Enter"));
        assert!(!signed_out.iter().any(|action| action.key == "x"));
        assert!(signed_in.iter().any(|action| action.key == "x"));
        assert!(!signed_in.iter().any(|action| action.key == "Enter"));
    }

    #[test]
    fn test_support_actions_show_copy_only_with_link() {
        // Act
        let without_link = support_actions(false);
        let with_link = support_actions(true);

        // Assert
        assert!(!without_link.iter().any(|action| action.key == "y"));
        assert!(!without_link.iter().any(|action| action.key == "n"));
        assert!(with_link.iter().any(|action| action.key == "y"));
        assert!(with_link.iter().any(|action| action.key == "n"));
    }

    #[test]
    fn test_report_actions_follow_active_pane() {
        // Act
        let overview = report_actions(ReportPane::Overview, true);
        let files = report_actions(ReportPane::Files, false);

        // Assert
        assert!(!overview.iter().any(|action| action.key == "Enter/Space"));
        assert!(overview.iter().any(|action| action.key == "e"));
        assert!(files.iter().any(|action| action.key == "Enter/Space"));
        assert!(!files.iter().any(|action| action.key == "e"));
    }

    #[test]
    fn test_footer_text_joins_actions_in_order() {
        // Arrange
        let actions = vec![
            HelpAction::new("quit", "q", "Quit"),
            HelpAction::new("help", "?", "Help"),
        ];

        // Act
        let help_text = footer_text(&actions);

        // Assert
        assert_eq!(help_text, "q: quit | ?: help");
    }
}
