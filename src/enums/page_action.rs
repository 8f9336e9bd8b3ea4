use std::str::FromStr;
use crate::enums::status_decision::StatusDecision;
use crate::errors::RevostayError;

/// Something the seller asks the bookings view to do while it is polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    SetStatus { booking_id: u64, decision: StatusDecision },
    Refresh,
    Quit,
}

impl FromStr for PageAction {
    type Err = RevostayError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().unwrap_or_default().to_ascii_lowercase();

        let decision = match verb.as_str() {
            "confirm" | "c" => StatusDecision::Confirm,
            "reject" | "r" => StatusDecision::Reject,
            "refresh" | "" => return Ok(Self::Refresh),
            "quit" | "q" | "exit" => return Ok(Self::Quit),
            _ => {
                return Err(RevostayError::user_input_error(
                    line.trim(),
                    "an action",
                    "Use 'confirm <id>', 'reject <id>', 'refresh' or 'quit'",
                ))
            }
        };

        let raw_id = parts.next().unwrap_or_default();
        let booking_id = raw_id.parse::<u64>().map_err(|_| {
            RevostayError::user_input_error(raw_id, "a numeric booking id", "Example: 'confirm 7'")
        })?;

        Ok(Self::SetStatus { booking_id, decision })
    }
}
