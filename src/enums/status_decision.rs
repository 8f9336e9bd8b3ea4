use crate::enums::booking_status::BookingStatus;

/// A seller's answer to a pending visit request.
///
/// `CANCELLED` has no decision: the console only ever receives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusDecision {
    Confirm,
    Reject,
}

impl StatusDecision {
    pub fn target_status(self) -> BookingStatus {
        match self {
            Self::Confirm => BookingStatus::Confirmed,
            Self::Reject => BookingStatus::Rejected,
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Confirm => "confirmed",
            Self::Reject => "rejected",
        }
    }
}
