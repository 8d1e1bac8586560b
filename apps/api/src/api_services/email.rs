use std::sync::Arc;

use sedapal_application::EmailService;
use sedapal_core::AppError;
use sedapal_infrastructure::{ConsoleEmailService, SmtpEmailConfig, SmtpEmailService};
use tracing::info;

use crate::api_config::{ApiConfig, EmailProviderConfig};

pub(super) fn build_email_service(config: &ApiConfig) -> Result<Arc<dyn EmailService>, AppError> {
    let service: Arc<dyn EmailService> = match &config.email_provider {
        EmailProviderConfig::Console => {
            info!("email provider: console");
            Arc::new(ConsoleEmailService::new())
        }
        EmailProviderConfig::Smtp(smtp) => {
            info!(host = %smtp.host, port = smtp.port, "email provider: smtp");
            let smtp_config = SmtpEmailConfig {
                host: smtp.host.clone(),
                port: smtp.port,
                username: smtp.username.clone(),
                password: smtp.password.clone(),
                from_address: smtp.from_address.clone(),
            };
            Arc::new(SmtpEmailService::new(smtp_config)?)
        }
    };

    Ok(service)
}
