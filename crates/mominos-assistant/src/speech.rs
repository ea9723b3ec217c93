use web_sys::SpeechSynthesisUtterance;

use crate::error::Error;

/// Read a reply out loud with the browser's speech synthesis
pub fn speak(text: &str) -> Result<(), Error> {
    let window = web_sys::window().ok_or(Error::Unavailable("Window".to_string()))?;
    let synthesis = window
        .speech_synthesis()
        .map_err(|_| Error::Unavailable("Speech synthesis".to_string()))?;
    let utterance = SpeechSynthesisUtterance::new_with_text(text)
        .map_err(|_| Error::Unavailable("Speech synthesis".to_string()))?;
    utterance.set_rate(0.9);
    utterance.set_pitch(1.0);
    synthesis.speak(&utterance);
    Ok(())
}
