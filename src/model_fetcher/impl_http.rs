use crate::library::logger::interface::Logger;
use crate::model_fetcher::interface::ModelFetcher;
use std::sync::Arc;

pub struct ModelFetcherHttp {
    client: reqwest::blocking::Client,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ModelFetcherHttp {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            logger: logger.with_namespace("model_fetcher").with_namespace("http"),
        }
    }
}

impl ModelFetcher for ModelFetcherHttp {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("Fetching {}", url))?;

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("server returned {} for {}", status, url).into());
        }

        let bytes = response.bytes()?.to_vec();
        self.logger
            .info(&format!("Fetched {} bytes from {}", bytes.len(), url))?;
        Ok(bytes)
    }
}
