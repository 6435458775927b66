use {
    crate::config::{CheckoutConfig, ProviderConfig},
    crate::domain::{
        charge::{ChargeResult, PixStatus},
        error::ChargeError,
        id::TransactionId,
        provider::PixProvider,
    },
    reqwest::Client,
    serde::{Deserialize, Serialize},
    std::{future::Future, pin::Pin, time::Duration},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Black Cat Pagamentos REST client. One charge template per instance;
/// credentials go out as HTTP Basic auth on every request.
pub struct BlackCatProvider {
    client: Client,
    config: ProviderConfig,
    checkout: CheckoutConfig,
}

impl BlackCatProvider {
    pub fn new(config: ProviderConfig, checkout: CheckoutConfig) -> Result<Self, ChargeError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            config,
            checkout,
        })
    }

    pub fn from_env() -> Result<Self, ChargeError> {
        Self::new(ProviderConfig::from_env()?, CheckoutConfig::default())
    }
}

impl PixProvider for BlackCatProvider {
    fn create_charge(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<ChargeResult, ChargeError>> + Send + '_>> {
        Box::pin(async move { self.create_charge_inner().await })
    }

    fn fetch_status(
        &self,
        id: &TransactionId,
    ) -> Pin<Box<dyn Future<Output = Result<PixStatus, ChargeError>> + Send + '_>> {
        let id = id.clone();
        Box::pin(async move { self.fetch_status_inner(&id).await })
    }
}

impl BlackCatProvider {
    async fn create_charge_inner(&self) -> Result<ChargeResult, ChargeError> {
        let payload = TransactionRequest {
            amount: self.checkout.amount.centavos(),
            payment_method: "pix",
            currency: self.checkout.currency.as_str(),
            items: vec![LineItem {
                title: &self.checkout.item_title,
                unit_price: self.checkout.amount.centavos(),
                quantity: 1,
                tangible: false,
            }],
            customer: placeholder_customer(),
        };

        let response = self
            .client
            .post(format!("{}/transactions", self.config.base_url))
            .basic_auth(&self.config.public_key, Some(&self.config.secret_key))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body = %body, "charge creation rejected by provider");
            return Err(ChargeError::RemoteApi { status });
        }

        let body = response.text().await?;
        let data: TransactionResponse = serde_json::from_str(&body)
            .map_err(|e| ChargeError::MalformedResponse(format!("invalid JSON body: {e}")))?;

        let copy_paste_key = data
            .pix
            .and_then(|pix| pix.qrcode)
            .ok_or_else(|| ChargeError::MalformedResponse("pix.qrcode missing".into()))?;
        let raw_id = data
            .id
            .ok_or_else(|| ChargeError::MalformedResponse("transaction id missing".into()))?;

        Ok(ChargeResult {
            copy_paste_key,
            transaction_id: TransactionId::new(raw_id.into_string())?,
        })
    }

    async fn fetch_status_inner(&self, id: &TransactionId) -> Result<PixStatus, ChargeError> {
        let response = self
            .client
            .get(format!(
                "{}/transactions/{}",
                self.config.base_url,
                id.as_str()
            ))
            .basic_auth(&self.config.public_key, Some(&self.config.secret_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, transaction_id = %id, body = %body, "status check rejected by provider");
            return Err(ChargeError::RemoteApi { status });
        }

        let body = response.text().await?;
        let data: StatusResponse = serde_json::from_str(&body)
            .map_err(|e| ChargeError::MalformedResponse(format!("invalid JSON body: {e}")))?;

        let value = data
            .status
            .ok_or_else(|| ChargeError::MalformedResponse("status field missing".into()))?;
        Ok(PixStatus::new(value))
    }
}

// ── Wire types ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransactionRequest<'a> {
    amount: i64,
    payment_method: &'static str,
    currency: &'a str,
    items: Vec<LineItem<'a>>,
    customer: Customer,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LineItem<'a> {
    title: &'a str,
    unit_price: i64,
    quantity: u32,
    tangible: bool,
}

#[derive(Serialize)]
struct Customer {
    name: &'static str,
    email: &'static str,
    document: Document,
    address: Address,
}

#[derive(Serialize)]
struct Document {
    #[serde(rename = "type")]
    kind: &'static str,
    number: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Address {
    street: &'static str,
    street_number: &'static str,
    zip_code: &'static str,
    neighborhood: &'static str,
    city: &'static str,
    state: &'static str,
    country: &'static str,
}

/// The provider rejects transactions without a full customer record, so
/// anonymous storefront charges carry this placeholder identity.
fn placeholder_customer() -> Customer {
    Customer {
        name: "Cliente Anônimo",
        email: "cliente@email.com",
        document: Document {
            kind: "cpf",
            number: "00000000000",
        },
        address: Address {
            street: "Rua Fictícia",
            street_number: "123",
            zip_code: "01001000",
            neighborhood: "Bairro Fictício",
            city: "Cidade Fictícia",
            state: "SP",
            country: "BR",
        },
    }
}

#[derive(Deserialize)]
struct TransactionResponse {
    id: Option<RawTransactionId>,
    pix: Option<PixDetails>,
}

#[derive(Deserialize)]
struct PixDetails {
    qrcode: Option<String>,
}

/// The provider emits the transaction id as a string or a bare number
/// depending on the endpoint version.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTransactionId {
    Text(String),
    Numeric(i64),
}

impl RawTransactionId {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Numeric(n) => n.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct StatusResponse {
    status: Option<String>,
}
