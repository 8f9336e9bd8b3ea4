use clap::{Subcommand, ValueEnum};

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Store the credentials issued by the RevoStay login flow
    Login {
        #[clap(short, long)]
        token: String,
        #[clap(short, long)]
        role: String,
        #[clap(short, long)]
        username: String,
        #[clap(short, long)]
        full_name: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Show who is logged in
    Whoami,
    /// Open a role dashboard
    Dashboard {
        #[clap(short, long, value_enum, default_value_t = DashboardKind::Seller)]
        role: DashboardKind,
    },
    /// List booking requests for the logged-in seller
    Bookings,
    /// List booking requests and keep polling for new ones
    Watch {
        #[clap(short, long)]
        interval: Option<u64>,
    },
    /// Confirm a pending booking request
    Confirm { id: u64 },
    /// Reject a pending booking request
    Reject { id: u64 },
    /// Check the configuration file
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DashboardKind {
    Seller,
    Admin,
}
