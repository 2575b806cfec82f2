//! Webview glue for the audio element and layout measurement.

use std::path::Path;

use dioxus::prelude::*;
use greeting_deck::{load_media_as_data_url, PlayRequest, PlaybackOutcome};

/// DOM id of the page's `<audio>` element.
pub const AUDIO_ELEMENT_ID: &str = "greeting-audio";

/// DOM id of the carousel viewport.
pub const CAROUSEL_ELEMENT_ID: &str = "card-carousel";

/// Receives `[generation, src, start]`, binds the source and, when `start`
/// is set, starts playback. A request older than the one last bound is
/// ignored. Reports `bound`, `started`, `superseded`, `blocked:<name>` or
/// `failed:<name>`.
const PLAY_SCRIPT: &str = r#"
const [generation, src, start] = await dioxus.recv();
const el = document.getElementById('greeting-audio');
if (!el) { return 'failed:NoAudioElement'; }
const latest = () => Number(el.dataset.generation || 0);
if (generation < latest()) { return 'superseded'; }
el.dataset.generation = String(generation);
el.src = src;
if (!start) { return 'bound'; }
try {
    await el.play();
    return generation === latest() ? 'started' : 'superseded';
} catch (e) {
    if (generation !== latest()) { return 'superseded'; }
    return (e.name === 'NotAllowedError' ? 'blocked:' : 'failed:') + e.name;
}
"#;

const MEASURE_SCRIPT: &str = r#"
const el = document.getElementById('card-carousel');
return el ? el.clientWidth : 0;
"#;

/// Visible width of the carousel in CSS pixels.
pub async fn measure_viewport() -> Option<f64> {
    match document::eval(MEASURE_SCRIPT).join::<f64>().await {
        Ok(width) if width > 0.0 => Some(width),
        Ok(_) => None,
        Err(e) => {
            tracing::trace!("Viewport measurement failed: {:?}", e);
            None
        }
    }
}

/// Reads the requested track from `asset_dir` as a data URL.
pub async fn load_track(request: &PlayRequest, asset_dir: &Path) -> Result<String, String> {
    let path = asset_dir.join(request.track.path);
    match tokio::task::spawn_blocking(move || load_media_as_data_url(&path)).await {
        Ok(Ok(url)) => Ok(url),
        Ok(Err(e)) => Err(e.to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Binds `src` to the audio element and, unless preloading, starts it.
pub async fn play(request: &PlayRequest, src: String) -> PlaybackOutcome {
    let mut eval = document::eval(PLAY_SCRIPT);
    let message = (request.generation, src, request.trigger.starts_playback());
    if let Err(e) = eval.send(message) {
        return PlaybackOutcome::Failed(format!("{:?}", e));
    }
    match eval.join::<String>().await {
        Ok(report) => PlaybackOutcome::from_report(&report),
        Err(e) => PlaybackOutcome::Failed(format!("{:?}", e)),
    }
}
