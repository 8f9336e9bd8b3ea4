use crate::enums::booking_status::BookingStatus;

/// Colour coding of a booking status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Pending,
    Confirmed,
    Rejected,
    Cancelled,
    Neutral,
}

impl StatusStyle {
    pub fn for_status(status: &BookingStatus) -> Self {
        match status {
            BookingStatus::Pending => Self::Pending,
            BookingStatus::Confirmed => Self::Confirmed,
            BookingStatus::Rejected => Self::Rejected,
            BookingStatus::Cancelled => Self::Cancelled,
            BookingStatus::Unrecognized(_) => Self::Neutral,
        }
    }

    /// Total over every input string; anything unknown gets `Neutral`.
    pub fn for_raw(status: &str) -> Self {
        Self::for_status(&BookingStatus::from(status))
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Pending => "bg-yellow-100 text-yellow-800",
            Self::Confirmed => "bg-green-100 text-green-800",
            Self::Rejected => "bg-red-100 text-red-800",
            Self::Cancelled | Self::Neutral => "bg-gray-100 text-gray-800",
        }
    }

    pub fn ansi(self) -> &'static str {
        match self {
            Self::Pending => "\x1b[33m",
            Self::Confirmed => "\x1b[32m",
            Self::Rejected => "\x1b[31m",
            Self::Cancelled | Self::Neutral => "\x1b[90m",
        }
    }

    pub fn paint(self, text: &str) -> String {
        format!("{}{}\x1b[0m", self.ansi(), text)
    }
}
