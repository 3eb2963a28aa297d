//! System clipboard access, one `arboard::Clipboard` per operation

use arboard::Clipboard;

pub fn copy(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    tracing::debug!(bytes = text.len(), "copied to clipboard");
    Ok(())
}

pub fn paste() -> Result<String, arboard::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.get_text()
}

/// Footer message for a finished copy
pub fn copy_status(result: Result<(), arboard::Error>, what: &str) -> String {
    match result {
        Ok(()) => format!("Copied {what}"),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard write failed");
            format!("Clipboard unavailable: {e}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_status_messages() {
        assert_eq!(copy_status(Ok(()), "response"), "Copied response");
        let failed = copy_status(Err(arboard::Error::ClipboardNotSupported), "line");
        assert!(failed.starts_with("Clipboard unavailable"));
    }
}
