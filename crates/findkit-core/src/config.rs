use std::env;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

use crate::domain::GlobalId;
use crate::filter::{policy, FilterLimits};
use crate::ValidationError;

pub const PRODUCTION_ENDPOINT: &str = "https://svcs.ebay.com/services/search/FindingService/v1";
pub const SANDBOX_ENDPOINT: &str =
    "https://svcs.sandbox.ebay.com/services/search/FindingService/v1";
pub const SERVICE_VERSION: &str = "1.13.0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Payload encoding used for both request and response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WireFormat {
    Json,
    #[default]
    Xml,
}

impl WireFormat {
    pub const ALL: [Self; 2] = [Self::Json, Self::Xml];

    /// Value of the `X-EBAY-SOA-*-DATA-FORMAT` headers.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Xml => "XML",
        }
    }

    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "text/xml",
        }
    }
}

impl Display for WireFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WireFormat {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "JSON" => Ok(Self::Json),
            "XML" => Ok(Self::Xml),
            other => Err(ValidationError::UnknownValue {
                kind: "wire format",
                value: other.to_owned(),
                expected: String::from("JSON, XML"),
            }),
        }
    }
}

/// Settings shared by every request created from one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    app_id: String,
    endpoint: String,
    global_id: GlobalId,
    timeout: Duration,
    page_limit: u32,
    wire_format: WireFormat,
    filter_limits: FilterLimits,
}

impl ServiceConfig {
    /// Production defaults for the given application id.
    pub fn new(app_id: impl Into<String>) -> Result<Self, ValidationError> {
        let app_id = app_id.into();
        if app_id.trim().is_empty() {
            return Err(ValidationError::EmptyAppId);
        }

        Ok(Self {
            app_id,
            endpoint: PRODUCTION_ENDPOINT.to_owned(),
            global_id: GlobalId::default(),
            timeout: DEFAULT_TIMEOUT,
            page_limit: DEFAULT_PAGE_LIMIT,
            wire_format: WireFormat::default(),
            filter_limits: FilterLimits::default(),
        })
    }

    /// Reads the `FINDKIT_*` environment variables.
    ///
    /// `FINDKIT_APP_ID` is required. `FINDKIT_ENDPOINT` wins over
    /// `FINDKIT_SANDBOX`.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// [`Self::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_id = lookup("FINDKIT_APP_ID").ok_or(ValidationError::MissingEnv {
            name: "FINDKIT_APP_ID",
        })?;
        let mut config = Self::new(app_id)?;

        if let Some(sandbox) = lookup("FINDKIT_SANDBOX") {
            if parse_flag("FINDKIT_SANDBOX", &sandbox)? {
                config = config.with_endpoint(SANDBOX_ENDPOINT);
            }
        }
        if let Some(endpoint) = lookup("FINDKIT_ENDPOINT").filter(|value| !value.trim().is_empty())
        {
            config = config.with_endpoint(endpoint.trim());
        }
        if let Some(global_id) = lookup("FINDKIT_GLOBAL_ID") {
            let parsed = global_id.parse().map_err(|_| ValidationError::InvalidEnv {
                name: "FINDKIT_GLOBAL_ID",
                value: global_id.clone(),
            })?;
            config = config.with_global_id(parsed);
        }
        if let Some(timeout) = lookup("FINDKIT_TIMEOUT_MS") {
            let millis = timeout
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|millis| *millis > 0)
                .ok_or_else(|| ValidationError::InvalidEnv {
                    name: "FINDKIT_TIMEOUT_MS",
                    value: timeout.clone(),
                })?;
            config = config.with_timeout(Duration::from_millis(millis));
        }
        if let Some(limit) = lookup("FINDKIT_PAGE_LIMIT") {
            let parsed = limit
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidEnv {
                    name: "FINDKIT_PAGE_LIMIT",
                    value: limit.clone(),
                })?;
            config = config.with_page_limit(parsed);
        }
        if let Some(format) = lookup("FINDKIT_WIRE_FORMAT") {
            let parsed = format.parse().map_err(|_| ValidationError::InvalidEnv {
                name: "FINDKIT_WIRE_FORMAT",
                value: format.clone(),
            })?;
            config = config.with_wire_format(parsed);
        }

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_sandbox(self) -> Self {
        self.with_endpoint(SANDBOX_ENDPOINT)
    }

    pub fn with_global_id(mut self, global_id: GlobalId) -> Self {
        self.global_id = global_id;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Default page size for new requests, clamped to `[1, 100]`.
    pub fn with_page_limit(mut self, page_limit: i64) -> Self {
        self.page_limit = policy::page(page_limit);
        self
    }

    pub fn with_wire_format(mut self, wire_format: WireFormat) -> Self {
        self.wire_format = wire_format;
        self
    }

    pub fn with_filter_limits(mut self, filter_limits: FilterLimits) -> Self {
        self.filter_limits = filter_limits;
        self
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub const fn global_id(&self) -> GlobalId {
        self.global_id
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub const fn page_limit(&self) -> u32 {
        self.page_limit
    }

    pub const fn wire_format(&self) -> WireFormat {
        self.wire_format
    }

    pub const fn filter_limits(&self) -> FilterLimits {
        self.filter_limits
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ValidationError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ValidationError::InvalidEnv {
            name,
            value: value.to_owned(),
        }),
    }
}
