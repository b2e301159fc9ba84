use serde::{Deserialize, Serialize};

use crate::draft::BookingDraft;

/// Wizard position. `Submitted` is terminal; `Failed` is recoverable back
/// to `Payment` with the draft intact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStep {
    DatesAndGuests,
    GuestInfo,
    Payment,
    Submitted,
    Failed,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("Required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid step transition from {from:?}")]
    InvalidTransition { from: BookingStep },
}

/// The 3-step booking wizard. Forward movement is gated on per-step
/// validation; backward movement is always allowed and never validates.
/// Submission outcomes are applied via [`complete`](Self::complete) and
/// [`fail`](Self::fail) so the asynchronous call itself stays outside the
/// state machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingFlow {
    step: BookingStep,
    draft: BookingDraft,
    reference: Option<String>,
    error: Option<String>,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self {
            step: BookingStep::DatesAndGuests,
            draft: BookingDraft::default(),
            reference: None,
            error: None,
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut BookingDraft {
        &mut self.draft
    }

    /// Reference handed back by the collaborator after submission.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate the draft against one step's requirements, naming the
    /// offending fields on failure.
    pub fn validate_step(&self, step: BookingStep) -> Result<(), FlowError> {
        let mut missing = Vec::new();
        match step {
            BookingStep::DatesAndGuests => {
                if self.draft.check_in_date.is_none() {
                    missing.push("checkInDate");
                }
                if self.draft.check_out_date.is_none() {
                    missing.push("checkOutDate");
                }
                if missing.is_empty() && self.draft.nights() <= 0 {
                    missing.push("checkOutDate");
                }
            }
            BookingStep::GuestInfo => {
                let guest = &self.draft.guest_details.primary_guest;
                if guest.name.trim().is_empty() {
                    missing.push("name");
                }
                if guest.email.trim().is_empty() {
                    missing.push("email");
                }
                if guest.phone.trim().is_empty() {
                    missing.push("phone");
                }
            }
            BookingStep::Payment => {
                let payment = &self.draft.payment_info;
                if payment.card_number.trim().is_empty() {
                    missing.push("cardNumber");
                }
                if payment.expiry_date.trim().is_empty() {
                    missing.push("expiryDate");
                }
                if payment.cvv.trim().is_empty() {
                    missing.push("cvv");
                }
                if payment.cardholder_name.trim().is_empty() {
                    missing.push("cardholderName");
                }
            }
            BookingStep::Submitted | BookingStep::Failed => {}
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FlowError::MissingFields(missing))
        }
    }

    /// Move forward one step, validating the current one.
    pub fn advance(&mut self) -> Result<BookingStep, FlowError> {
        self.validate_step(self.step)?;
        self.step = match self.step {
            BookingStep::DatesAndGuests => BookingStep::GuestInfo,
            BookingStep::GuestInfo => BookingStep::Payment,
            from => return Err(FlowError::InvalidTransition { from }),
        };
        Ok(self.step)
    }

    /// Move back one step. Never validates; always allowed from any
    /// non-initial editing step.
    pub fn back(&mut self) -> Result<BookingStep, FlowError> {
        self.step = match self.step {
            BookingStep::GuestInfo => BookingStep::DatesAndGuests,
            BookingStep::Payment => BookingStep::GuestInfo,
            from => return Err(FlowError::InvalidTransition { from }),
        };
        Ok(self.step)
    }

    /// The draft is ready to hand to the collaborator: all three editing
    /// steps validate and the wizard sits on the payment step.
    pub fn ready_to_submit(&self) -> Result<(), FlowError> {
        if self.step != BookingStep::Payment {
            return Err(FlowError::InvalidTransition { from: self.step });
        }
        self.validate_step(BookingStep::DatesAndGuests)?;
        self.validate_step(BookingStep::GuestInfo)?;
        self.validate_step(BookingStep::Payment)?;
        Ok(())
    }

    /// Apply a successful submission. The draft is done with; only the
    /// reference remains interesting.
    pub fn complete(&mut self, reference: impl Into<String>) -> Result<(), FlowError> {
        if self.step != BookingStep::Payment {
            return Err(FlowError::InvalidTransition { from: self.step });
        }
        self.step = BookingStep::Submitted;
        self.reference = Some(reference.into());
        self.error = None;
        Ok(())
    }

    /// Apply a failed submission. The draft is preserved for retry.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), FlowError> {
        if self.step != BookingStep::Payment {
            return Err(FlowError::InvalidTransition { from: self.step });
        }
        self.step = BookingStep::Failed;
        self.error = Some(message.into());
        Ok(())
    }

    /// Return from a failed submission to the payment step, draft intact.
    pub fn retry(&mut self) -> Result<BookingStep, FlowError> {
        if self.step != BookingStep::Failed {
            return Err(FlowError::InvalidTransition { from: self.step });
        }
        self.step = BookingStep::Payment;
        Ok(self.step)
    }
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new()
    }
}
