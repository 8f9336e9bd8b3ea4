use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::booking_status_path;
use crate::enums::commands::{Commands, DashboardKind};
use crate::enums::role::Role;
use crate::enums::status_change_outcome::StatusChangeOutcome;
use crate::enums::status_decision::StatusDecision;
use crate::errors::{RevostayError, RevostayResult};
use crate::helpers::action_reader::{spawn_ctrl_c_listener, spawn_stdin_reader};
use crate::logger::toast_logger::ToastLogger;
use crate::services::api_client::ApiClient;
use crate::services::file_session_persistence::FileSessionPersistence;
use crate::services::session_store::SessionStore;
use crate::structs::config::config::Config;
use crate::structs::notification::Notification;
use crate::structs::session::Session;
use crate::traits::notifier::Notifier;
use crate::ui::booking_renderer::BookingRenderer;
use crate::ui::dashboard_page::DashboardPage;
use crate::ui::seller_bookings_page::SellerBookingsPage;

pub struct CommandRunner {
    start_time: Option<Instant>,
    notifier: Arc<dyn Notifier>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
            notifier: Arc::new(ToastLogger::new()),
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> RevostayResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Login { token, role, username, full_name } => self.login_command(token, role, username, full_name),
            Commands::Logout => self.logout_command(),
            Commands::Whoami => self.whoami_command(),
            Commands::Dashboard { role } => self.dashboard_command(role),
            Commands::Bookings => self.bookings_command().await,
            Commands::Watch { interval } => self.watch_command(interval).await,
            Commands::Confirm { id } => self.status_command(id, StatusDecision::Confirm).await,
            Commands::Reject { id } => self.status_command(id, StatusDecision::Reject).await,
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> RevostayResult<Config> {
        let config = ConfigManager::load()?;
        if let Err(errors) = ConfigManager::validate_config(&config) {
            return Err(RevostayError::MultipleErrors {
                errors: errors
                    .iter()
                    .map(|e| RevostayError::config_error(e, None, Some("Run 'revostay validate' for details")))
                    .collect(),
                context: "configuration loading".to_string(),
            });
        }
        Ok(config)
    }

    fn open_session(&self, config: &Config) -> RevostayResult<Arc<SessionStore>> {
        let path = ConfigManager::session_path(config)?;
        log::debug!("🔑 Session file: {}", path.display());
        let store = SessionStore::open(Box::new(FileSessionPersistence::new(path)))?;
        Ok(Arc::new(store))
    }

    fn bookings_page(&self, config: &Config, session: Arc<SessionStore>) -> RevostayResult<SellerBookingsPage> {
        let api = Arc::new(ApiClient::new(&config.api)?);
        log::debug!("🌐 Backend: {}", api.base_url());
        Ok(SellerBookingsPage::new(api, session, Arc::clone(&self.notifier))
            .with_poll_interval(config.polling.interval()))
    }

    fn init_command(&self) -> RevostayResult<()> {
        log::info!("🚀 Initializing revostay configuration...");

        let path = ConfigManager::create_sample_config()?;
        log::info!("✅ Configuration file created at: {}", path.display());
        log::info!("📝 Point api.base_url at your RevoStay backend.");
        log::info!("🔧 Run 'revostay validate' to check your configuration.");
        Ok(())
    }

    fn login_command(&self, token: String, role: String, username: String, full_name: Option<String>) -> RevostayResult<()> {
        let role = Role::from(role.trim().to_ascii_uppercase().as_str());
        if let Role::Unrecognized(raw) = &role {
            return Err(RevostayError::user_input_error(raw, "ADMIN, SELLER or BUYER", "Pass the role returned by the login response"));
        }
        if token.trim().is_empty() {
            return Err(RevostayError::user_input_error(&token, "a non-empty token", "Pass the token returned by the login response"));
        }

        let config = self.load_config()?;
        let session = self.open_session(&config)?;
        session.login(Session::new(token, role, username, full_name))?;

        self.notifier.notify(Notification::success("Login successful"));
        Ok(())
    }

    fn logout_command(&self) -> RevostayResult<()> {
        let config = self.load_config()?;
        let session = self.open_session(&config)?;
        session.logout()?;

        self.notifier.notify(Notification::success("Logout successful"));
        Ok(())
    }

    fn whoami_command(&self) -> RevostayResult<()> {
        let config = self.load_config()?;
        let session = self.open_session(&config)?.get();

        if session.token().is_none() {
            return Err(RevostayError::not_authorized("no stored session"));
        }

        let role = session.role.as_ref().map_or("unknown role", |role| role.as_str());
        println!("Welcome, {} ({})", session.display_name().unwrap_or("unknown user"), role);
        Ok(())
    }

    fn dashboard_command(&self, kind: DashboardKind) -> RevostayResult<()> {
        let config = self.load_config()?;
        let session = self.open_session(&config)?;
        let mut page = match kind {
            DashboardKind::Seller => DashboardPage::seller(session),
            DashboardKind::Admin => DashboardPage::admin(session),
        };

        page.activate();
        match page.render() {
            Some(text) => {
                println!("{}", text);
                Ok(())
            }
            None => Err(RevostayError::not_authorized("this dashboard needs a different role")),
        }
    }

    async fn bookings_command(&self) -> RevostayResult<()> {
        let config = self.load_config()?;
        let session = self.open_session(&config)?;
        let mut page = self.bookings_page(&config, session)?.with_terminal_output(true);

        if page.activate().await.is_redirect() {
            return Err(RevostayError::not_authorized("booking requests are only available to sellers"));
        }

        println!("{}", page.render(&BookingRenderer::for_terminal()));
        Ok(())
    }

    async fn watch_command(&self, interval: Option<u64>) -> RevostayResult<()> {
        let config = self.load_config()?;
        let session = self.open_session(&config)?;
        let mut page = self.bookings_page(&config, session)?.with_terminal_output(true);
        if let Some(seconds) = interval.filter(|s| *s > 0) {
            page = page.with_poll_interval(Duration::from_secs(seconds));
        }

        self.notifier.notify(Notification::info(
            "Watching booking requests. Type 'confirm <id>', 'reject <id>', 'refresh' or 'quit'.",
        ));

        let (tx, rx) = mpsc::unbounded_channel();
        let reader = spawn_stdin_reader(tx.clone());
        let ctrl_c = spawn_ctrl_c_listener(tx);

        let state = page.run(rx).await;

        reader.abort();
        ctrl_c.abort();

        if state.is_redirect() {
            return Err(RevostayError::not_authorized("session is missing, expired or not a seller session"));
        }
        Ok(())
    }

    async fn status_command(&self, booking_id: u64, decision: StatusDecision) -> RevostayResult<()> {
        let config = self.load_config()?;
        let session = self.open_session(&config)?;
        let mut page = self.bookings_page(&config, session)?;

        let endpoint = format!("{}{}", config.api.base_url.trim_end_matches('/'), booking_status_path(booking_id));
        let outcome = page.set_status(booking_id, decision).await;
        Self::finish_status_change(&page, outcome, &endpoint)
    }

    /// Maps a one-shot status change to the command result. A write that
    /// succeeded but whose follow-up reload was refused still fails the command.
    pub fn finish_status_change(page: &SellerBookingsPage, outcome: StatusChangeOutcome, endpoint: &str) -> RevostayResult<()> {
        match outcome {
            StatusChangeOutcome::Applied(_) if page.state().is_redirect() => {
                Err(RevostayError::not_authorized("session expired while reloading booking requests"))
            }
            StatusChangeOutcome::Applied(_) => {
                println!("{}", page.render(&BookingRenderer::for_terminal()));
                Ok(())
            }
            StatusChangeOutcome::Failed(error) => Err(RevostayError::api_error("booking status update", endpoint, &error)),
            StatusChangeOutcome::Redirected => {
                Err(RevostayError::not_authorized("session is missing, expired or not a seller session"))
            }
        }
    }

    fn validate_command(&self) -> RevostayResult<()> {
        log::info!("🔍 Validating revostay configuration...");

        let config = ConfigManager::load()?;
        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                log::info!("   🌐 Backend: {}", config.api.base_url);
                log::info!("   ⏱️ Request timeout: {}s", config.api.timeout_secs);
                log::info!("   🔄 Polling every {}s", config.polling.interval_secs);
                Ok(())
            }
            Err(errors) => {
                for error in &errors {
                    log::error!("   ❌ {}", error);
                }
                Err(RevostayError::config_error(
                    &format!("{} problem(s) found", errors.len()),
                    None,
                    Some("Fix the listed fields in ~/revostay/config.toml"),
                ))
            }
        }
    }
}
