use crate::library::logger::interface::Logger;
use crate::model_fetcher::interface::ModelFetcher;
use std::sync::Arc;

/// Serves canned bytes, or fails every fetch when built with `new_failing`.
#[allow(dead_code)]
pub struct ModelFetcherFake {
    logger: Arc<dyn Logger + Send + Sync>,
    fail: bool,
}

#[allow(dead_code)]
impl ModelFetcherFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("model_fetcher").with_namespace("fake"),
            fail: false,
        }
    }

    pub fn new_failing(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("model_fetcher").with_namespace("fake"),
            fail: true,
        }
    }
}

impl ModelFetcher for ModelFetcherFake {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!("Fetching {} (fake)", url))?;

        if self.fail {
            return Err(format!("fetch failed for {}", url).into());
        }

        Ok(vec![0; 64])
    }
}
