use serde::Deserialize;

// Toast notification category
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Map a category label to a kind.
    ///
    /// Accepts the categories the portal flashes (`success`, `danger`,
    /// `error`, `warning`, `info`, `message`). Anything else falls back to
    /// [`ToastKind::Info`] without complaint.
    pub fn from_category(category: &str) -> Self {
        match category.trim().to_ascii_lowercase().as_str() {
            "success" => ToastKind::Success,
            "danger" | "error" => ToastKind::Error,
            "warning" | "warn" => ToastKind::Warning,
            _ => ToastKind::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        }
    }
}

// A server-side flash message, as embedded in the page by the portal
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FlashMessage {
    // `get_flashed_messages(with_categories=true)` yields `[category, message]`
    Pair(String, String),
    Object {
        #[serde(default)]
        category: Option<String>,
        message: String,
    },
}

impl FlashMessage {
    pub fn kind(&self) -> ToastKind {
        match self {
            FlashMessage::Pair(category, _) => ToastKind::from_category(category),
            FlashMessage::Object { category, .. } => category
                .as_deref()
                .map(ToastKind::from_category)
                .unwrap_or_default(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FlashMessage::Pair(_, message) => message,
            FlashMessage::Object { message, .. } => message,
        }
    }
}

/// Decode a JSON array of flash messages.
pub fn parse_flashes(raw: &str) -> Result<Vec<FlashMessage>, String> {
    serde_json::from_str(raw).map_err(|e| format!("Failed to parse flash messages: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portal_categories_map_to_kinds() {
        assert_eq!(ToastKind::from_category("success"), ToastKind::Success);
        assert_eq!(ToastKind::from_category("danger"), ToastKind::Error);
        assert_eq!(ToastKind::from_category("error"), ToastKind::Error);
        assert_eq!(ToastKind::from_category("Warning"), ToastKind::Warning);
        assert_eq!(ToastKind::from_category("info"), ToastKind::Info);
        assert_eq!(ToastKind::from_category("message"), ToastKind::Info);
        assert_eq!(ToastKind::from_category("bogus"), ToastKind::Info);
        assert_eq!(ToastKind::default(), ToastKind::Info);
    }

    #[test]
    fn flashes_decode_from_pairs_and_objects() {
        let raw = r#"[["danger", "Insufficient funds"], {"message": "Welcome back"}, {"category": "success", "message": "Saved"}]"#;
        let flashes = parse_flashes(raw).unwrap();

        assert_eq!(flashes.len(), 3);
        assert_eq!(flashes[0].kind(), ToastKind::Error);
        assert_eq!(flashes[0].message(), "Insufficient funds");
        assert_eq!(flashes[1].kind(), ToastKind::Info);
        assert_eq!(flashes[1].message(), "Welcome back");
        assert_eq!(flashes[2].kind(), ToastKind::Success);
    }

    #[test]
    fn malformed_flashes_are_reported() {
        let err = parse_flashes("{not json").unwrap_err();
        assert!(err.starts_with("Failed to parse flash messages"));
    }
}
