use crate::Error;

/// the injected HTTP capability. the fetch loop only ever issues GETs for
/// whole text bodies, so one method covers all three endpoint shapes
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, Error>;
}

/// blocking client for the PUG REST service. deliberately configured
/// without a timeout: a hung request stalls the run until the transport
/// gives up on its own
pub struct PugClient {
    client: reqwest::blocking::Client,
}

impl PugClient {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("nscsmiles/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for PugClient {
    fn fetch(&self, url: &str) -> Result<String, Error> {
        // non-2xx statuses fault like transport errors do
        Ok(self.client.get(url).send()?.error_for_status()?.text()?)
    }
}
