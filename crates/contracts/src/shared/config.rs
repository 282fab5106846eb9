use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub delays: DelayConfig,
    pub search: SearchConfig,
    pub payment: PaymentConfig,
}

/// Имитация задержек сети, мс
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DelayConfig {
    pub upload_ms: u32,
    pub contact_ms: u32,
    pub payment_ms: u32,
    pub booking_ms: u32,
    pub dashboard_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    pub debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaymentConfig {
    pub currency_symbol: String,
    pub lines: Vec<PaymentLine>,
}

/// Строка сводки заказа на странице оплаты
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaymentLine {
    pub label: String,
    /// Сумма в центах
    pub amount_cents: u64,
}

impl PaymentConfig {
    pub fn total_cents(&self) -> u64 {
        self.lines.iter().map(|l| l.amount_cents).sum()
    }

    /// 129900 -> "$1,299.00"
    pub fn format(&self, cents: u64) -> String {
        let dollars = (cents / 100).to_string();
        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, ch) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("{}{}.{:02}", self.currency_symbol, grouped, cents % 100)
    }
}

impl Default for AppConfig {
    /// Те же значения, что и в `DEFAULT_CONFIG`
    fn default() -> Self {
        let line = |label: &str, amount_cents: u64| PaymentLine {
            label: label.to_string(),
            amount_cents,
        };
        Self {
            delays: DelayConfig {
                upload_ms: 2000,
                contact_ms: 2000,
                payment_ms: 3000,
                booking_ms: 2000,
                dashboard_ms: 1000,
            },
            search: SearchConfig { debounce_ms: 300 },
            payment: PaymentConfig {
                currency_symbol: "$".to_string(),
                lines: vec![
                    line("Bali Adventure Tour", 89900),
                    line("Travel Insurance", 9900),
                    line("Service Fee", 4900),
                    line("Taxes", 25200),
                ],
            },
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[delays]
upload_ms = 2000
contact_ms = 2000
payment_ms = 3000
booking_ms = 2000
dashboard_ms = 1000

[search]
debounce_ms = 300

[payment]
currency_symbol = "$"
lines = [
    { label = "Bali Adventure Tour", amount_cents = 89900 },
    { label = "Travel Insurance", amount_cents = 9900 },
    { label = "Service Fee", amount_cents = 4900 },
    { label = "Taxes", amount_cents = 25200 },
]
"#;

/// Load configuration
///
/// `override_toml` replaces the embedded default entirely when given.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    if let Some(contents) = override_toml {
        log::info!("Loading config from override");
        let config: AppConfig = toml::from_str(contents)?;
        return Ok(config);
    }

    log::info!("Using default embedded configuration");
    let config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Конфигурация с откатом на встроенную при ошибке разбора
pub fn load_config_or_default(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    match load_config(override_toml) {
        Ok(config) => Ok(config),
        Err(e) if override_toml.is_some() => {
            log::warn!("Invalid config override, falling back to defaults: {}", e);
            load_config(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config.delays.payment_ms, 3000);
        assert_eq!(config.delays.upload_ms, 2000);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.payment.lines.len(), 4);
    }

    #[test]
    fn test_embedded_matches_default() {
        assert_eq!(load_config(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_payment_total() {
        let payment = load_config(None).unwrap().payment;
        assert_eq!(payment.total_cents(), 129900);
        assert_eq!(payment.format(payment.total_cents()), "$1,299.00");
        assert_eq!(payment.format(89900), "$899.00");
        assert_eq!(payment.format(123456789), "$1,234,567.89");
    }

    #[test]
    fn test_override() {
        let text = DEFAULT_CONFIG.replace("debounce_ms = 300", "debounce_ms = 50");
        let config = load_config(Some(&text)).unwrap();
        assert_eq!(config.search.debounce_ms, 50);
    }

    #[test]
    fn test_broken_override_falls_back() {
        assert!(load_config(Some("[delays]\nupload_ms = \"soon\"")).is_err());
        let config = load_config_or_default(Some("not toml at all = = =")).unwrap();
        assert_eq!(config.search.debounce_ms, 300);
    }
}
