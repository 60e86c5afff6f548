/// A GET request against a fixed URL with optional extra headers.
///
/// Built once through the consuming `with_*` methods and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    url: String,
    headers: Vec<(String, String)>,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// Adds a header to the request. Invalid names or values surface as a
    /// request error when the request is sent.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Overrides the client's `User-Agent`, some servers block the default one
    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        self.with_header(reqwest::header::USER_AGENT.as_str(), user_agent)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Turns the request into a `reqwest` builder on the given client.
    pub(crate) fn to_builder(&self, client: &reqwest::Client) -> reqwest::RequestBuilder {
        self.headers
            .iter()
            .fold(client.get(&self.url), |builder, (name, value)| {
                builder.header(name.as_str(), value.as_str())
            })
    }
}
