use http::{Request, Response};

/// Sends one request and hands back the raw response.
///
/// Paths in requests are relative (`/api/posts`); the transport decides where
/// they go. Non-2xx statuses are not errors at this level.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: Request<Vec<u8>>) -> anyhow::Result<Response<Vec<u8>>>;
}

/// Redirects are not followed: a 3xx comes back as-is, so callers see the
/// server's `Location` (for example a bounce to `/login`) instead of the page
/// it leads to.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(ReqwestTransport {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: Request<Vec<u8>>) -> anyhow::Result<Response<Vec<u8>>> {
        let (parts, body) = request.into_parts();
        let path = parts
            .uri
            .path_and_query()
            .map(|p| p.as_str())
            .unwrap_or("/");

        let resp = self
            .client
            .request(parts.method.clone(), self.url_for(path))
            .headers(parts.headers)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = resp.bytes().await?;

        let mut builder = Response::builder().status(status);
        for (name, value) in headers.iter() {
            builder = builder.header(name, value);
        }
        Ok(builder.body(bytes.to_vec())?)
    }
}
