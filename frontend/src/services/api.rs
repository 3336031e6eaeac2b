use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    AdviceRequest, AdviceResponse, CowListResponse, CowResponse, CreateInseminationRequest,
    DeleteCowResponse, Farmer, InseminationListResponse, InseminationResponse, LoginRequest,
    SaveCowRequest, SessionResponse,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    fn farmer_url(&self, farmer_id: &str, path: &str) -> String {
        format!("{}/api/farmers/{}/{}", self.base_url, farmer_id, path)
    }

    /// Read the body of a successful response, or the server's error text
    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
        if response.ok() {
            match response.json::<T>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse response: {}", e)),
            }
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(error_text)
        }
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T, String> {
        let request = builder
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;

        match request.send().await {
            Ok(response) => Self::parse(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Send a request whose success carries no body
    async fn send_empty(builder: RequestBuilder) -> Result<(), String> {
        match builder.send().await {
            Ok(response) if response.ok() => Ok(()),
            Ok(response) => Err(response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string())),
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// The session restored by the backend, if any
    pub async fn get_session(&self) -> Result<Option<Farmer>, String> {
        match Request::get(&format!("{}/api/session", self.base_url)).send().await {
            Ok(response) => Ok(Self::parse::<SessionResponse>(response).await?.farmer),
            Err(e) => Err(format!("Failed to fetch session: {}", e)),
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<Option<Farmer>, String> {
        let url = format!("{}/api/session", self.base_url);
        let response: SessionResponse = Self::send_json(Request::post(&url), &request).await?;
        Ok(response.farmer)
    }

    pub async fn logout(&self) -> Result<(), String> {
        Self::send_empty(Request::delete(&format!("{}/api/session", self.base_url))).await
    }

    pub async fn list_cows(&self, farmer_id: &str) -> Result<CowListResponse, String> {
        match Request::get(&self.farmer_url(farmer_id, "cows")).send().await {
            Ok(response) => Self::parse(response).await,
            Err(e) => Err(format!("Failed to fetch cows: {}", e)),
        }
    }

    pub async fn create_cow(&self, farmer_id: &str, request: SaveCowRequest) -> Result<CowResponse, String> {
        Self::send_json(Request::post(&self.farmer_url(farmer_id, "cows")), &request).await
    }

    pub async fn update_cow(
        &self,
        farmer_id: &str,
        cow_id: &str,
        request: SaveCowRequest,
    ) -> Result<CowResponse, String> {
        let url = self.farmer_url(farmer_id, &format!("cows/{}", cow_id));
        Self::send_json(Request::put(&url), &request).await
    }

    pub async fn delete_cow(&self, farmer_id: &str, cow_id: &str) -> Result<DeleteCowResponse, String> {
        let url = self.farmer_url(farmer_id, &format!("cows/{}", cow_id));
        match Request::delete(&url).send().await {
            Ok(response) => Self::parse(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn list_inseminations(&self, farmer_id: &str) -> Result<InseminationListResponse, String> {
        match Request::get(&self.farmer_url(farmer_id, "inseminations")).send().await {
            Ok(response) => Self::parse(response).await,
            Err(e) => Err(format!("Failed to fetch insemination records: {}", e)),
        }
    }

    pub async fn create_insemination(
        &self,
        farmer_id: &str,
        request: CreateInseminationRequest,
    ) -> Result<InseminationResponse, String> {
        Self::send_json(Request::post(&self.farmer_url(farmer_id, "inseminations")), &request).await
    }

    pub async fn confirm_insemination(
        &self,
        farmer_id: &str,
        record_id: &str,
    ) -> Result<InseminationResponse, String> {
        let url = self.farmer_url(farmer_id, &format!("inseminations/{}/confirm", record_id));
        match Request::post(&url).send().await {
            Ok(response) => Self::parse(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn delete_insemination(&self, farmer_id: &str, record_id: &str) -> Result<(), String> {
        let url = self.farmer_url(farmer_id, &format!("inseminations/{}", record_id));
        Self::send_empty(Request::delete(&url)).await
    }

    pub async fn get_advice(&self, request: AdviceRequest) -> Result<AdviceResponse, String> {
        let url = format!("{}/api/advice", self.base_url);
        Self::send_json(Request::post(&url), &request).await
    }
}
