//! Spin HTTP component serving the image proxy.

use spin_sdk::http::{Request, Response};
use spin_sdk::http_component;

use crate::fetch::SpinFetcher;
use crate::handler::ImageProxy;

#[http_component]
async fn handle_image_proxy(req: Request) -> anyhow::Result<Response> {
    let proxy = ImageProxy::new(SpinFetcher);
    let response = proxy.handle(req.query()).await;

    let mut builder = Response::builder();
    builder.status(response.status().as_u16());
    for (name, value) in response.headers() {
        if let Ok(value) = value.to_str() {
            builder.header(name.as_str(), value);
        }
    }
    Ok(builder.body(response.into_body()).build())
}
