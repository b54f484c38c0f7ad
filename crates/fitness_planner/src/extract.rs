use crate::error::ExtractionError;

/// Isolate the JSON object inside free-form generated text.
///
/// Markdown fence markers are removed, then everything from the first `{` to
/// the last `}` is returned. Unrelated braces in surrounding prose are not
/// distinguished from the payload; the parser rejects whatever that yields.
pub fn extract_json(text: &str) -> Result<String, ExtractionError> {
    if text.trim().is_empty() {
        return Err(ExtractionError::Blank);
    }
    let cleaned = text.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if end > start => Ok(cleaned[start..=end].to_string()),
        _ => Err(ExtractionError::NoJsonObject),
    }
}
