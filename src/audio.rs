use crate::constants::WARP_CUE_URL;
use endgame_core::{AudioCue, CueError};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// One-shot warp sample played through a fresh `<audio>` element per cue.
pub struct WarpCue {
    url: &'static str,
}

impl Default for WarpCue {
    fn default() -> Self {
        Self { url: WARP_CUE_URL }
    }
}

impl AudioCue for WarpCue {
    fn play(&self, volume: f32) -> Result<(), CueError> {
        let audio = web::HtmlAudioElement::new_with_src(self.url)
            .map_err(|e| CueError::Create(format!("{:?}", e)))?;
        audio.set_volume(volume.clamp(0.0, 1.0) as f64);
        let promise = audio
            .play()
            .map_err(|e| CueError::Rejected(format!("{:?}", e)))?;
        // Autoplay policies reject asynchronously
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[audio] warp cue rejected: {:?}", e);
            }
        });
        Ok(())
    }
}
