use std::sync::Arc;

use crate::{
    auth::{decode_secret_key, random_secret_key, AuthManager},
    config::Config,
    notifier::WebhookNotifier,
};
use hormiga_core::{
    alerts::{BudgetAlertNotifier, NoopAlertNotifier},
    budgets::{BudgetService, BudgetServiceTrait},
    categories::{CategoryService, CategoryServiceTrait},
    dashboard::{DashboardService, DashboardServiceTrait},
    expenses::{ExpenseService, ExpenseServiceTrait},
    reports::{ReportService, ReportServiceTrait},
    users::{UserService, UserServiceTrait},
};
use hormiga_storage_sqlite::{
    db::{self, write_actor},
    BudgetRepository, CategoryRepository, ExpenseRepository, UserRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub category_service: Arc<dyn CategoryServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
    pub report_service: Arc<dyn ReportServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub auth: Arc<AuthManager>,
    /// Shared secret for the reporting API.
    pub api_token: Option<String>,
}

/// JSON logs filtered by `RUST_LOG` (default `info`). Installing the
/// subscriber also forwards `log` records from the core and storage crates.
pub fn init_tracing() {
    let log_format = std::env::var("HG_LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("text") {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    } else {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let category_repo = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let expense_repo = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let budget_repo = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));

    let notifier: Arc<dyn BudgetAlertNotifier> = match &config.alert_webhook_url {
        Some(url) => {
            tracing::info!("Budget alerts will be posted to {}", url);
            Arc::new(WebhookNotifier::new(
                url.clone(),
                config.alert_webhook_token.clone(),
            )?)
        }
        None => {
            tracing::info!("HG_ALERT_WEBHOOK_URL not set; budget alerts are disabled");
            Arc::new(NoopAlertNotifier)
        }
    };

    let budget_service = Arc::new(BudgetService::new(
        budget_repo.clone(),
        expense_repo.clone(),
    ));
    let expense_service = Arc::new(ExpenseService::new(
        expense_repo.clone(),
        category_repo.clone(),
        budget_repo.clone(),
        user_repo.clone(),
        notifier,
    ));
    let dashboard_service = Arc::new(DashboardService::new(
        expense_repo.clone(),
        budget_service.clone(),
    ));
    let report_service = Arc::new(ReportService::new(
        user_repo.clone(),
        budget_repo.clone(),
        expense_repo.clone(),
    ));
    let category_service = Arc::new(CategoryService::new(category_repo));
    let user_service = Arc::new(UserService::new(user_repo));

    let jwt_secret = match &config.jwt_secret {
        Some(raw) => decode_secret_key(raw)?,
        None => {
            tracing::warn!("HG_JWT_SECRET not set; access tokens will not survive a restart");
            random_secret_key()
        }
    };
    let auth = Arc::new(AuthManager::new(&jwt_secret, config.access_token_ttl));

    if config.api_token.is_none() {
        tracing::warn!("HG_API_TOKEN not set; the reporting API will reject every request");
    }

    Ok(Arc::new(AppState {
        category_service,
        expense_service,
        budget_service,
        dashboard_service,
        report_service,
        user_service,
        auth,
        api_token: config.api_token.clone(),
    }))
}
