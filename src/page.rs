// Access to data the hosting page embeds as `<script type="application/json">` blocks

#[cfg(feature = "web")]
pub fn embedded_json(id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    let text = element.text_content()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Nothing is embedded outside the browser
#[cfg(not(feature = "web"))]
pub fn embedded_json(_id: &str) -> Option<String> {
    None
}
