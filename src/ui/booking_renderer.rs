use crate::config::constants::DEFAULT_TERMINAL_WIDTH;
use crate::enums::status_style::StatusStyle;
use crate::structs::booking::Booking;

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Turns the bookings collection into terminal text.
pub struct BookingRenderer {
    width: usize,
    colored: bool,
}

impl BookingRenderer {
    pub fn new(width: usize, colored: bool) -> Self {
        Self { width: width.max(40), colored }
    }

    /// Renderer sized to the current terminal, with colours.
    pub fn for_terminal() -> Self {
        let width = terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| usize::from(w))
            .unwrap_or(DEFAULT_TERMINAL_WIDTH);
        Self::new(width, true)
    }

    /// Plain text at the default width, used by tests and piped output.
    pub fn plain() -> Self {
        Self::new(DEFAULT_TERMINAL_WIDTH, false)
    }

    pub fn render_page(&self, bookings: &[Booking], loading: bool) -> String {
        let mut out = String::new();
        out.push_str("Booking Requests\n");
        out.push_str("Manage property visit requests from potential buyers\n");
        out.push_str(&"━".repeat(self.width.min(60)));
        out.push('\n');

        if loading {
            out.push_str("Loading bookings...\n");
        } else if bookings.is_empty() {
            out.push_str("No booking requests yet.\n");
        } else {
            for booking in bookings {
                out.push_str(&self.render_booking(booking));
                out.push('\n');
            }
        }

        out
    }

    pub fn render_booking(&self, booking: &Booking) -> String {
        let style = StatusStyle::for_status(&booking.status);
        let status = booking.status.as_str();
        let badge = if self.colored { style.paint(status) } else { format!("[{}]", status) };

        let mut lines = Vec::new();
        let title_room = self.width.saturating_sub(status.len() + 12);
        lines.push(format!("#{:<5} {}  {}", booking.id, truncate(booking.property_title(), title_room), badge));
        lines.push(format!("       Requested by: {}", booking.buyer_name()));

        let visit_date = booking
            .visit_date
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string());
        let requested_on = booking
            .created_at
            .map(|created| created.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "       Visit Date: {}   Amount: {}   Requested on: {}",
            visit_date,
            booking.amount_label(),
            requested_on
        ));

        if let Some(message) = booking.message() {
            lines.push(format!("       Message: {}", message));
        }

        if booking.is_actionable() {
            lines.push(format!("       [confirm {id}] [reject {id}]", id = booking.id));
        }

        lines.join("\n")
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}
