//! Order confirmation email via SMTP.
//!
//! Delivery is best effort: a failed send is logged, never surfaced to the
//! customer placing the order.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType,
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::config::EmailConfig;
use crate::models::Order;

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// Email service for transactional order mail.
#[derive(Clone)]
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl EmailService {
    /// Create a new email service from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the SMTP relay cannot be configured.
    pub fn new(config: &EmailConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_string(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
        })
    }

    /// Send an order confirmation to the customer.
    ///
    /// # Errors
    ///
    /// Returns error if the message cannot be built or sent.
    pub async fn send_order_confirmation(&self, order: &Order) -> Result<(), EmailError> {
        let to = order.customer_email.as_str();
        let subject = format!("GadgetzWorld order #{} confirmed", order.id);
        let body = order_confirmation_body(order);

        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| EmailError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(to
                .parse()
                .map_err(|_| EmailError::InvalidAddress(to.to_string()))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        self.mailer.send(email).await?;

        tracing::info!(to = %to, order_id = %order.id, "Order confirmation sent");
        Ok(())
    }
}

/// Plain-text confirmation body.
fn order_confirmation_body(order: &Order) -> String {
    let name = order.customer_name.as_deref().unwrap_or("there");
    format!(
        "Hi {name},\n\n\
         Thanks for your order!\n\n\
         Order #{id}\n\
         Item: {item} x{quantity}\n\
         Total: {total}\n\
         Payment: {payment}\n\
         Placed on: {date}\n\n\
         We'll let you know when it ships.\n\n\
         - GadgetzWorld",
        id = order.id,
        item = order.product_name,
        quantity = order.quantity,
        total = order.total_price,
        payment = order.payment_method,
        date = order.order_date,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use gadgetz_core::{Email, OrderId, OrderStatus, PaymentMethod};
    use rust_decimal::Decimal;

    fn sample_order() -> Order {
        Order {
            id: OrderId::new(42),
            customer_email: Email::parse("buyer@example.com").unwrap(),
            customer_name: Some("Rana".to_string()),
            product_id: None,
            product_name: "Smart Watch".to_string(),
            quantity: 2,
            total_price: Decimal::new(25998, 2),
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::Card,
            transaction_id: None,
            order_date: NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_confirmation_body_mentions_order_details() {
        let body = order_confirmation_body(&sample_order());
        assert!(body.contains("Hi Rana"));
        assert!(body.contains("Order #42"));
        assert!(body.contains("Smart Watch x2"));
        assert!(body.contains("259.98"));
    }

    #[test]
    fn test_confirmation_body_without_name() {
        let mut order = sample_order();
        order.customer_name = None;
        let body = order_confirmation_body(&order);
        assert!(body.contains("Hi there"));
    }
}
