//! Wire types for the upstream freight quote API.
//!
//! Request and response shapes follow the provider exactly, including the
//! misspelled `ShippingSevicesArray` field and the string-typed price and
//! delivery time, which callers must parse.

use serde::{Deserialize, Serialize};

use crate::config::PackageSpec;

/// POST body for `/shipping/quote`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuoteRequest {
    #[serde(rename = "SellerCEP")]
    pub seller_cep: String,
    #[serde(rename = "RecipientCEP")]
    pub recipient_cep: String,
    pub shipment_invoice_value: f64,
    /// Always null: the provider then quotes every available service.
    pub shipping_service_code: Option<String>,
    pub recipient_country: String,
    pub shipping_item_array: Vec<ShippingItem>,
}

/// One package line of the quote request manifest.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShippingItem {
    pub height: u32,
    pub length: u32,
    pub quantity: u32,
    pub weight: f64,
    pub width: u32,
    #[serde(rename = "SKU", skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<&PackageSpec> for ShippingItem {
    fn from(spec: &PackageSpec) -> Self {
        ShippingItem {
            height: spec.height,
            length: spec.length,
            quantity: spec.quantity,
            weight: spec.weight,
            width: spec.width,
            sku: spec.sku.clone(),
            category: spec.category.clone(),
        }
    }
}

/// Response envelope. The provider may omit the array entirely.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteResponse {
    #[serde(rename = "ShippingSevicesArray")]
    pub shipping_services: Option<Vec<QuoteServiceEntry>>,
}

/// One quoted freight service. Numeric fields arrive as strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct QuoteServiceEntry {
    pub service_code: Option<String>,
    pub service_description: Option<String>,
    pub carrier: Option<String>,
    pub shipping_price: Option<String>,
    pub delivery_time: Option<String>,
    pub error: bool,
    pub msg: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_provider_field_names() {
        let request = QuoteRequest {
            seller_cep: "01310100".to_string(),
            recipient_cep: "20040020".to_string(),
            shipment_invoice_value: 320.685,
            shipping_service_code: None,
            recipient_country: "BR".to_string(),
            shipping_item_array: vec![ShippingItem {
                height: 2,
                length: 33,
                quantity: 1,
                weight: 1.18,
                width: 47,
                sku: Some("IDW_54626".to_string()),
                category: None,
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["SellerCEP"], "01310100");
        assert_eq!(json["RecipientCEP"], "20040020");
        assert_eq!(json["ShipmentInvoiceValue"], 320.685);
        assert_eq!(json["ShippingServiceCode"], serde_json::Value::Null);
        assert_eq!(json["RecipientCountry"], "BR");
        let item = &json["ShippingItemArray"][0];
        assert_eq!(item["Height"], 2);
        assert_eq!(item["Weight"], 1.18);
        assert_eq!(item["SKU"], "IDW_54626");
        assert!(item.get("Category").is_none());
    }

    #[test]
    fn response_parses_provider_spelling() {
        let body = r#"{"ShippingSevicesArray":[{"ServiceCode":"04014","Carrier":"Correios","ShippingPrice":"100.50","DeliveryTime":"5","Error":false}]}"#;
        let parsed: QuoteResponse = serde_json::from_str(body).unwrap();
        let services = parsed.shipping_services.unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].shipping_price.as_deref(), Some("100.50"));
        assert_eq!(services[0].delivery_time.as_deref(), Some("5"));
        assert_eq!(services[0].carrier.as_deref(), Some("Correios"));
    }

    #[test]
    fn response_tolerates_missing_array_and_fields() {
        let parsed: QuoteResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.shipping_services.is_none());

        let sparse: QuoteResponse =
            serde_json::from_str(r#"{"ShippingSevicesArray":[{}]}"#).unwrap();
        let services = sparse.shipping_services.unwrap();
        assert!(services[0].shipping_price.is_none());
        assert!(!services[0].error);
    }
}
