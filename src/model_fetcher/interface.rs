/// Retrieves model artifacts by URL.
pub trait ModelFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;
}
