//! Concurrent shape fetches. Every request is issued before any is awaited;
//! a failed fetch leaves an empty shape in its slot.

use crate::dom::js_err;
use anyhow::{anyhow, bail};
use morph_core::ShapeDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub async fn load_shapes(urls: &[&str]) -> Vec<ShapeDescriptor> {
    let Some(window) = web::window() else {
        log::error!("[shapes] no window; nothing to load");
        return vec![ShapeDescriptor::empty(); urls.len()];
    };

    let pending: Vec<(&str, JsFuture)> = urls
        .iter()
        .map(|url| (*url, JsFuture::from(window.fetch_with_str(url))))
        .collect();

    let mut shapes = Vec::with_capacity(pending.len());
    for (url, request) in pending {
        let shape = match fetch_text(request).await {
            Ok(text) => ShapeDescriptor::from_svg_lossy(url, &text),
            Err(e) => {
                log::warn!("[shapes] {} failed: {:?}", url, e);
                ShapeDescriptor::empty()
            }
        };
        shapes.push(shape);
    }
    log::info!(
        "[shapes] loaded {} shapes ({} empty)",
        shapes.len(),
        shapes.iter().filter(|s| s.is_empty()).count()
    );
    shapes
}

async fn fetch_text(request: JsFuture) -> anyhow::Result<String> {
    let resp: web::Response = request.await.map_err(js_err)?.dyn_into().map_err(js_err)?;
    if !resp.ok() {
        bail!("HTTP {}", resp.status());
    }
    let body = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    body.as_string().ok_or_else(|| anyhow!("response body is not text"))
}
