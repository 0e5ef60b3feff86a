pub mod progress;
pub mod transcription;
pub mod verses;
