//! Canned transcripts standing in for speech-to-text.
//!
//! Audio is never decoded. The file name alone selects a transcript, which
//! is then fed to the analysis entry points like any other text.

use crate::error::{GlossaError, Result};
use log::debug;
use std::path::Path;

/// Keyword to transcript, checked in order against the lower-cased file name.
const TRANSCRIPTS: &[(&str, &str)] = &[
    (
        "greeting",
        "Hello there! How are you doing today? I'm feeling great and excited about natural language processing.",
    ),
    (
        "meeting",
        "Let's schedule a meeting for next Tuesday at 2 PM. We need to discuss the project timeline and deliverables.",
    ),
    (
        "feedback",
        "I really enjoyed the presentation. The content was informative and the delivery was excellent. Great job!",
    ),
    (
        "complaint",
        "I'm very disappointed with the service. The product arrived late and was damaged. I want a refund immediately.",
    ),
    (
        "lecture",
        "Today we'll be discussing the fundamentals of natural language processing and how it's applied in modern AI systems. NLP combines linguistics, computer science, and artificial intelligence to enable machines to understand human language.",
    ),
    (
        "interview",
        "Could you tell me about your experience with machine learning projects? I'm particularly interested in how you've applied NLP techniques to solve real-world problems.",
    ),
    (
        "notes",
        "Remember to complete the data preprocessing step before training the model. We need to implement tokenization, stemming, and remove stopwords to improve accuracy.",
    ),
    (
        "speech",
        "Artificial intelligence is transforming our world in unprecedented ways. From healthcare to transportation, AI technologies are helping us solve complex problems and create new opportunities for innovation.",
    ),
];

/// Transcript returned when no keyword matches.
pub const DEFAULT_TRANSCRIPT: &str = "This is a transcription of your audio file. In a production environment, we would use advanced speech recognition APIs to accurately convert your speech to text. Natural language processing enables computers to understand, interpret, and generate human language in a valuable and helpful way.";

/// Returns the canned transcript for a file name.
pub fn transcribe(file_name: &str) -> &'static str {
    let name = file_name.to_lowercase();
    TRANSCRIPTS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(keyword, text)| {
            debug!("transcript keyword {:?} matched {:?}", keyword, file_name);
            *text
        })
        .unwrap_or(DEFAULT_TRANSCRIPT)
}

/// Returns the canned transcript for the file name component of `path`.
pub fn transcribe_path(path: &Path) -> Result<&'static str> {
    let name = path
        .file_name()
        .ok_or_else(|| GlossaError::InvalidInput(format!("no file name in {}", path.display())))?;
    Ok(transcribe(&name.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_keyword_match() {
        assert!(transcribe("greeting.wav").starts_with("Hello there!"));
        assert!(transcribe("Team_MEETING_01.mp3").starts_with("Let's schedule"));
    }

    #[test]
    fn test_first_keyword_wins() {
        // feedback precedes complaint in the table
        assert!(transcribe("complaint-feedback.ogg").starts_with("I really enjoyed"));
    }

    #[test]
    fn test_default() {
        assert_eq!(transcribe("recording.wav"), DEFAULT_TRANSCRIPT);
        assert_eq!(transcribe(""), DEFAULT_TRANSCRIPT);
    }

    #[test]
    fn test_transcribe_path() {
        let path = PathBuf::from("/tmp/audio/lecture-week1.m4a");
        assert!(transcribe_path(&path).unwrap().starts_with("Today we'll"));
    }

    #[test]
    fn test_path_without_file_name() {
        let path = PathBuf::from("/");
        assert!(matches!(
            transcribe_path(&path),
            Err(GlossaError::InvalidInput(_))
        ));
    }
}
