//! One-shot export of the canvas as a JPEG file.

use crate::canvas::Canvas;
use crate::config::SketchConfig;
use crate::error::SketchResult;
use crate::util::time;
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};

/// File name for an export taken at `epoch_millis`.
pub fn export_file_name(epoch_millis: u64) -> String {
    format!("{epoch_millis}.jpg")
}

/// Flatten the canvas to RGB, dropping alpha.
pub fn to_rgb_image(canvas: &Canvas) -> RgbImage {
    let image = canvas.image();
    let width = image.size[0];
    RgbImage::from_fn(image.size[0] as u32, image.size[1] as u32, |x, y| {
        let c = image.pixels[y as usize * width + x as usize];
        Rgb([c.r(), c.g(), c.b()])
    })
}

/// Encode the canvas as a JPEG at the given quality (1-100).
pub fn encode_jpeg(canvas: &Canvas, quality: u8) -> SketchResult<Vec<u8>> {
    let rgb = to_rgb_image(canvas);
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality).encode_image(&rgb)?;
    Ok(bytes)
}

/// Encode the canvas and write it to the configured export directory.
///
/// Returns where the image went.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_canvas(canvas: &Canvas, config: &SketchConfig) -> SketchResult<String> {
    let bytes = encode_jpeg(canvas, config.jpeg_quality)?;
    let path = config
        .export_dir
        .join(export_file_name(time::epoch_millis()));
    std::fs::write(&path, &bytes)?;
    log::info!("Exported {} bytes to {}", bytes.len(), path.display());
    Ok(path.display().to_string())
}

/// Encode the canvas and hand it to the browser as a download.
///
/// Returns the downloaded file name.
#[cfg(target_arch = "wasm32")]
pub fn save_canvas(canvas: &Canvas, config: &SketchConfig) -> SketchResult<String> {
    let bytes = encode_jpeg(canvas, config.jpeg_quality)?;
    let file_name = export_file_name(time::epoch_millis());
    offer_download(&bytes, &file_name)?;
    log::info!("Offered {} bytes as {}", bytes.len(), file_name);
    Ok(file_name)
}

#[cfg(target_arch = "wasm32")]
fn offer_download(bytes: &[u8], file_name: &str) -> SketchResult<()> {
    use crate::error::SketchError;
    use eframe::wasm_bindgen::JsCast as _;

    let js_err = |e: eframe::wasm_bindgen::JsValue| SketchError::Download(format!("{e:?}"));

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/jpeg");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SketchError::Download("no document".to_owned()))?;
    let link = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| SketchError::Download("not an anchor element".to_owned()))?;
    link.set_href(&url);
    link.set_download(file_name);
    link.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)
}
