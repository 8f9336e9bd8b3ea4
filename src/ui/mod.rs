pub mod booking_renderer;
pub mod dashboard_page;
pub mod seller_bookings_page;
