//! Test fixtures and factory functions for creating test data.

use axum_test::multipart::{MultipartForm, Part};
use serde_json::json;

pub const BISMILLAH: &str = "بِسْمِ اللَّهِ الرَّحْمَنِ الرَّحِيمِ";

pub const AL_HAMD: &str = "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ";

/// Two verses of page 1, with verse-number tokens as found in the mushaf.
pub const SAMPLE_CORPUS: &str = r#"[
    {"page": 1, "ayah": 1, "text": "بِسْمِ اللَّهِ الرَّحْمَنِ الرَّحِيمِ ﴿١﴾"},
    {"page": 1, "ayah": 2, "text": "الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ ﴿٢﴾"}
]"#;

/// Create a compare request body against explicit text.
pub fn compare_text_request(transcribed: &str, expected: &str) -> serde_json::Value {
    json!({ "transcribed": transcribed, "expected": expected })
}

/// Create a compare request body against a corpus verse.
pub fn compare_verse_request(transcribed: &str, page: u32, ayah: u32) -> serde_json::Value {
    json!({ "transcribed": transcribed, "page": page, "ayah": ayah })
}

/// Multipart form with a small fake audio file.
pub fn audio_form(file_name: &str) -> MultipartForm {
    audio_form_sized(file_name, 256)
}

/// Audio upload of `len` zero bytes.
pub fn audio_form_sized(file_name: &str, len: usize) -> MultipartForm {
    let part = Part::bytes(vec![0u8; len])
        .file_name(file_name)
        .mime_type("audio/wav");
    MultipartForm::new().add_part("file", part)
}
