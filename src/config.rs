use std::time::Duration;

pub struct MailConfig {
    pub base_url: String,
    pub auth_token: String,
    pub sender: String,
    pub operator_address: String,
    pub timeout: Duration,
}

pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub mail: MailConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid number");
        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| "./data/submissions.db".to_string());

        let base_url = std::env::var("MAIL_BASE_URL").expect("MAIL_BASE_URL must be set in .env");
        let auth_token =
            std::env::var("MAIL_AUTH_TOKEN").expect("MAIL_AUTH_TOKEN must be set in .env");
        let sender = std::env::var("EMAIL_SENDER").expect("EMAIL_SENDER must be set in .env");
        let operator_address = std::env::var("CC_EMAIL").expect("CC_EMAIL must be set in .env");
        let timeout_ms = std::env::var("MAIL_TIMEOUT_MS")
            .unwrap_or_else(|_| "10000".to_string())
            .parse::<u64>()
            .expect("MAIL_TIMEOUT_MS must be a valid number");

        Self {
            host,
            port,
            database_path,
            mail: MailConfig {
                base_url,
                auth_token,
                sender,
                operator_address,
                timeout: Duration::from_millis(timeout_ms),
            },
        }
    }
}
