use serde::{Deserialize, Serialize};

use crate::config::WireFormat;
use crate::domain::Operation;
use crate::filter::ItemFilter;
use crate::FindingError;

pub const XML_NAMESPACE: &str = "http://www.ebay.com/marketplace/search/v1/services";
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Wire-neutral request document shared by every operation.
///
/// Each operation fills only the fields it supports; empty fields are left
/// out of both encodings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    #[serde(rename = "@xmlns", default, skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category_id: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub item_filter: Vec<ItemFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aspect_filter: Vec<AspectFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output_selector: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_input: Option<PaginationInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate: Option<Affiliate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_postal_code: Option<String>,
}

/// Product reference: the id type is an attribute, the id the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductId {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "$text")]
    pub value: String,
}

/// JSON spelling of [`ProductId`].
#[derive(Debug, Serialize, Deserialize)]
struct JsonProductId {
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "#text")]
    value: String,
}

impl From<ProductId> for JsonProductId {
    fn from(product: ProductId) -> Self {
        Self {
            kind: product.kind,
            value: product.value,
        }
    }
}

impl From<JsonProductId> for ProductId {
    fn from(product: JsonProductId) -> Self {
        Self {
            kind: product.kind,
            value: product.value,
        }
    }
}

/// JSON body: the payload with `productId` swapped for its JSON spelling.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonBody<'a> {
    #[serde(flatten)]
    payload: &'a RequestPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_id: Option<JsonProductId>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument {
    #[serde(flatten)]
    payload: RequestPayload,
    #[serde(default)]
    product_id: Option<JsonProductId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInput {
    pub entries_per_page: u32,
    pub page_number: u32,
}

/// Affiliate tracking details; empty parts are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affiliate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
}

impl Affiliate {
    pub fn new(network_id: &str, tracking_id: &str, custom_id: &str) -> Self {
        let part = |value: &str| (!value.is_empty()).then(|| value.to_owned());
        Self {
            network_id: part(network_id),
            tracking_id: part(tracking_id),
            custom_id: part(custom_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectFilter {
    pub aspect_name: String,
    #[serde(default)]
    pub aspect_value_name: Vec<String>,
}

impl RequestPayload {
    /// Encodes the payload for `operation`.
    ///
    /// XML documents carry a declaration, the `<operation>Request` root and the
    /// service namespace. JSON bodies are the bare object.
    pub fn encode(mut self, format: WireFormat, operation: Operation) -> Result<String, FindingError> {
        match format {
            WireFormat::Json => {
                self.xmlns = None;
                let product_id = self.product_id.take().map(JsonProductId::from);
                let body = JsonBody {
                    payload: &self,
                    product_id,
                };
                serde_json::to_string(&body)
                    .map_err(|error| FindingError::Serialization(error.to_string()))
            }
            WireFormat::Xml => {
                self.xmlns = Some(XML_NAMESPACE.to_owned());
                let document = quick_xml::se::to_string_with_root(&operation.request_root(), &self)
                    .map_err(|error| FindingError::Serialization(error.to_string()))?;
                Ok(format!("{XML_DECLARATION}{document}"))
            }
        }
    }

    /// Parses a body produced by [`Self::encode`].
    pub fn decode(body: &str, format: WireFormat) -> Result<Self, FindingError> {
        let mut payload: Self = match format {
            WireFormat::Json => {
                let document: JsonDocument = serde_json::from_str(body)
                    .map_err(|error| FindingError::Deserialization(error.to_string()))?;
                RequestPayload {
                    product_id: document.product_id.map(ProductId::from),
                    ..document.payload
                }
            }
            WireFormat::Xml => quick_xml::de::from_str(body)
                .map_err(|error| FindingError::Deserialization(error.to_string()))?,
        };
        payload.xmlns = None;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_encodes_to_bare_documents() {
        let json = RequestPayload::default()
            .encode(WireFormat::Json, Operation::GetVersion)
            .expect("json");
        assert_eq!(json, "{}");

        let xml = RequestPayload::default()
            .encode(WireFormat::Xml, Operation::GetVersion)
            .expect("xml");
        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains("<getVersionRequest"));
        assert!(xml.contains(XML_NAMESPACE));
    }

    #[test]
    fn product_id_type_is_an_xml_attribute() {
        let payload = RequestPayload {
            product_id: Some(ProductId {
                kind: String::from("ISBN"),
                value: String::from("9780261102385"),
            }),
            ..RequestPayload::default()
        };

        let xml = payload
            .encode(WireFormat::Xml, Operation::FindItemsByProduct)
            .expect("xml");
        assert!(xml.contains(r#"<productId type="ISBN">9780261102385</productId>"#));
    }

    #[test]
    fn product_id_uses_plain_keys_in_json() {
        let payload = RequestPayload {
            product_id: Some(ProductId {
                kind: String::from("ISBN"),
                value: String::from("9780261102385"),
            }),
            ..RequestPayload::default()
        };

        let json = payload
            .clone()
            .encode(WireFormat::Json, Operation::FindItemsByProduct)
            .expect("json");
        assert_eq!(
            json,
            r##"{"productId":{"type":"ISBN","#text":"9780261102385"}}"##
        );

        let decoded = RequestPayload::decode(&json, WireFormat::Json).expect("decode");
        assert_eq!(decoded, payload);
    }

    #[test]
    fn affiliate_omits_empty_parts() {
        let affiliate = Affiliate::new("9", "", "campaign");
        assert_eq!(affiliate.network_id.as_deref(), Some("9"));
        assert_eq!(affiliate.tracking_id, None);

        let json = serde_json::to_string(&affiliate).expect("json");
        assert_eq!(json, r#"{"networkId":"9","customId":"campaign"}"#);
    }

    #[test]
    fn xml_decode_drops_the_namespace() {
        let payload = RequestPayload {
            keywords: Some(String::from("tolkien")),
            category_id: vec![String::from("267"), String::from("29223")],
            ..RequestPayload::default()
        };
        let body = payload
            .clone()
            .encode(WireFormat::Xml, Operation::FindItemsAdvanced)
            .expect("xml");

        let decoded = RequestPayload::decode(&body, WireFormat::Xml).expect("decode");
        assert_eq!(decoded, payload);
    }

    #[test]
    fn malformed_body_is_a_deserialization_error() {
        let error = RequestPayload::decode("{", WireFormat::Json).expect_err("invalid json");
        assert!(matches!(error, FindingError::Deserialization(_)));
    }
}
