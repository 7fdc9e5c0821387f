use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Decoded RGBA8 image ready for GPU upload.
pub struct ImageRgba {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Fetch a static asset relative to the page and return its bytes.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {url}: not a Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", resp.status());
    }
    let buf_promise = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?;
    let buf = JsFuture::from(buf_promise)
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();
    log::info!("[assets] loaded {} ({} bytes)", url, bytes.len());
    Ok(bytes)
}

pub async fn load_font(url: &str) -> anyhow::Result<Vec<u8>> {
    fetch_bytes(url).await
}

pub async fn load_image_rgba(url: &str) -> anyhow::Result<ImageRgba> {
    let bytes = fetch_bytes(url).await?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| anyhow::anyhow!("decode {url}: {e}"))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    log::info!("[assets] decoded {} {}x{}", url, width, height);
    Ok(ImageRgba {
        width,
        height,
        pixels: img.into_raw(),
    })
}
