//! Donation state behind the Support tab.

use crate::domain::input::InputState;
use crate::infra::api::PaymentLink;

pub const DONATION_DEFAULT_AMOUNT: u32 = 100;
pub const DONATION_STEP: u32 = 10;
pub const DONATION_MIN_AMOUNT: u32 = 10;
pub const DONATION_MAX_AMOUNT: u32 = 1000;

/// Focusable fields of the donation form, in navigation order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SupportField {
    Amount,
    Message,
    Generate,
}

impl SupportField {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            SupportField::Amount => SupportField::Message,
            SupportField::Message => SupportField::Generate,
            SupportField::Generate => SupportField::Amount,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            SupportField::Amount => SupportField::Generate,
            SupportField::Message => SupportField::Amount,
            SupportField::Generate => SupportField::Message,
        }
    }
}

/// Amount, optional message, and the most recent payment link.
pub struct SupportManager {
    pub amount: u32,
    pub is_editing_message: bool,
    pub link: Option<PaymentLink>,
    pub message: InputState,
    pub pending: bool,
    pub selected_field: SupportField,
}

impl SupportManager {
    pub(crate) fn new() -> Self {
        Self {
            amount: DONATION_DEFAULT_AMOUNT,
            is_editing_message: false,
            link: None,
            message: InputState::new(),
            pending: false,
            selected_field: SupportField::Amount,
        }
    }

    pub fn select_next_field(&mut self) {
        self.selected_field = self.selected_field.next();
    }

    pub fn select_previous_field(&mut self) {
        self.selected_field = self.selected_field.previous();
    }

    pub fn increase_amount(&mut self) {
        self.amount = (self.amount + DONATION_STEP).min(DONATION_MAX_AMOUNT);
    }

    pub fn decrease_amount(&mut self) {
        self.amount = self
            .amount
            .saturating_sub(DONATION_STEP)
            .max(DONATION_MIN_AMOUNT);
    }

    pub fn start_message_editing(&mut self) {
        self.is_editing_message = true;
    }

    pub fn stop_message_editing(&mut self) {
        self.is_editing_message = false;
    }

    pub(crate) fn begin_request(&mut self) {
        self.pending = true;
    }

    pub(crate) fn apply_payment_link(&mut self, link: PaymentLink) {
        self.link = Some(link);
        self.pending = false;
    }

    pub(crate) fn apply_payment_failure(&mut self) {
        self.pending = false;
    }

    /// Clears the current link so a fresh one can be requested. Amount and
    /// message are kept.
    pub fn reset_link(&mut self) {
        self.link = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_steps_stay_within_bounds() {
        // Arrange
        let mut support = SupportManager::new();
        assert_eq!(support.amount, DONATION_DEFAULT_AMOUNT);

        // Act
        for _ in 0..200 {
            support.increase_amount();
        }

        // Assert
        assert_eq!(support.amount, DONATION_MAX_AMOUNT);

        // Act
        for _ in 0..200 {
            support.decrease_amount();
        }

        // Assert
        assert_eq!(support.amount, DONATION_MIN_AMOUNT);
    }

    #[test]
    fn test_reset_link_keeps_amount_and_message() {
        // Arrange
        let mut support = SupportManager::new();
        support.increase_amount();
        support.message.insert_text("thanks");
        support.apply_payment_link(PaymentLink {
            payment_url: "upi://pay?pa=reactor@upi&am=110".to_string(),
            transaction_id: "txn-1".to_string(),
        });

        // Act
        support.reset_link();

        // Assert
        assert!(support.link.is_none());
        assert_eq!(support.amount, 110);
        assert_eq!(support.message.text(), "thanks");
    }

    #[test]
    fn test_field_selection_wraps_in_both_directions() {
        // Arrange
        let mut support = SupportManager::new();
        assert_eq!(support.selected_field, SupportField::Amount);

        // Act & Assert
        support.select_next_field();
        assert_eq!(support.selected_field, SupportField::Message);
        support.select_next_field();
        assert_eq!(support.selected_field, SupportField::Generate);
        support.select_next_field();
        assert_eq!(support.selected_field, SupportField::Amount);
        support.select_previous_field();
        assert_eq!(support.selected_field, SupportField::Generate);
    }

    #[test]
    fn test_payment_failure_clears_pending() {
        // Arrange
        let mut support = SupportManager::new();
        support.begin_request();
        assert!(support.pending);

        // Act
        support.apply_payment_failure();

        // Assert
        assert!(!support.pending);
        assert!(support.link.is_none());
    }
}
