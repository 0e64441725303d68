//! Freight quoting against the external shipping-rate API.
//!
//! One outbound POST per quote, no retries and no caching. Expected failure
//! modes (invalid CEPs, upstream rejection, transport errors, an empty quote
//! list) come back as [`ServiceResult::Failure`] values; this boundary never
//! returns `Err` for them.

pub mod wire;

use async_trait::async_trait;
use reqwest::header;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use utoipa::ToSchema;

use crate::cep;
use crate::config::{FreteApiConfig, PackageSpec};
use crate::result::ServiceResult;
use wire::{QuoteRequest, QuoteResponse, ShippingItem};

/// Origin/destination pair to quote.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Simulacao {
    /// Origin CEP, 8 digits.
    #[schema(example = "01310100")]
    pub origem: String,
    /// Destination CEP, 8 digits.
    #[schema(example = "20040020")]
    pub destino: String,
}

/// A successful freight quote: price plus estimated delivery time in days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CotacaoFrete {
    #[schema(value_type = String, example = "100.50")]
    pub shipping_price: Decimal,
    #[schema(example = 5)]
    pub original_delivery_time: i32,
}

/// Capability to price a route. The HTTP-backed implementation is
/// [`ShippingService`]; order orchestration only sees this trait.
#[async_trait]
pub trait FreightQuoter: Send + Sync {
    async fn calcular_frete(&self, cotacao: &Simulacao) -> ServiceResult<CotacaoFrete>;
}

/// Freight quote client for the external shipping-rate API.
pub struct ShippingService {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
    declared_value: f64,
    packages: Vec<PackageSpec>,
}

impl ShippingService {
    pub fn new(config: &FreteApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            declared_value: config.declared_value,
            packages: config.packages.clone(),
        })
    }

    fn build_request(&self, cotacao: &Simulacao) -> QuoteRequest {
        QuoteRequest {
            seller_cep: cotacao.origem.clone(),
            recipient_cep: cotacao.destino.clone(),
            shipment_invoice_value: self.declared_value,
            shipping_service_code: None,
            recipient_country: "BR".to_string(),
            shipping_item_array: self.packages.iter().map(ShippingItem::from).collect(),
        }
    }
}

#[async_trait]
impl FreightQuoter for ShippingService {
    async fn calcular_frete(&self, cotacao: &Simulacao) -> ServiceResult<CotacaoFrete> {
        if !cep::is_valid(&cotacao.origem) || !cep::is_valid(&cotacao.destino) {
            tracing::warn!(
                origem = %cotacao.origem,
                destino = %cotacao.destino,
                "freight quote rejected: invalid postal codes"
            );
            return ServiceResult::failure(400, "The provided postal codes are invalid");
        }

        let url = format!("{}/shipping/quote", self.base_url);
        tracing::info!(%url, "requesting freight quote");

        let response = match self
            .client
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .header("token", &self.access_token)
            .json(&self.build_request(cotacao))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "freight quote transport failure");
                return ServiceResult::failure(500, format!("Error calculating freight: {}", e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "freight API returned an error status");
            return ServiceResult::failure(status.as_u16(), "Failed to query the freight API");
        }

        let parsed: QuoteResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::error!(error = %e, "freight API response was not readable");
                return ServiceResult::failure(500, format!("Error calculating freight: {}", e));
            }
        };

        let services = parsed.shipping_services.unwrap_or_default();
        let Some(first) = services.first() else {
            tracing::warn!("freight API response carried no services");
            return ServiceResult::failure(500, "No freight service found");
        };

        let price = first
            .shipping_price
            .as_deref()
            .and_then(|raw| Decimal::from_str(raw).ok());
        let delivery_time = first
            .delivery_time
            .as_deref()
            .and_then(|raw| raw.parse::<i32>().ok());

        match (price, delivery_time) {
            (Some(shipping_price), Some(original_delivery_time)) => {
                tracing::info!(
                    price = %shipping_price,
                    delivery_days = original_delivery_time,
                    "freight quote obtained"
                );
                ServiceResult::success(CotacaoFrete {
                    shipping_price,
                    original_delivery_time,
                })
            }
            _ => {
                tracing::warn!(
                    price = ?first.shipping_price,
                    delivery_time = ?first.delivery_time,
                    "freight service entry had unparsable price or delivery time"
                );
                ServiceResult::failure(500, "Freight service returned an unreadable quote")
            }
        }
    }
}
