//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use teamroll::RollError;
    use teamroll::io::error::{WithOperation, clipboard_error, invalid_parameter};

    // Tests I/O errors expose their source
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let error = RollError::Io {
            operation: "write teams",
            source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"),
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("write teams"));
        assert!(error.to_string().contains("closed"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("teams", &9, &"must be between 2 and 8");
        let message = error.to_string();
        assert!(message.contains("teams"));
        assert!(message.contains('9'));
        assert!(message.contains("must be between 2 and 8"));
        assert!(error.source().is_none());
    }

    // Tests user-facing lookup errors name the offending input
    // Verified by omitting the input from messages
    #[test]
    fn test_lookup_error_messages() {
        let unknown = RollError::UnknownCharacter {
            id: "paimon".to_string(),
        };
        assert!(unknown.to_string().contains("paimon"));

        let facet = RollError::UnknownFacetValue {
            value: "banana".to_string(),
        };
        assert!(facet.to_string().contains("banana"));

        let command = RollError::UnknownCommand {
            input: "dance".to_string(),
        };
        assert!(command.to_string().contains("dance"));
        assert!(command.to_string().contains("help"));
    }

    // Tests clipboard errors carry the backend reason
    // Verified by dropping the reason
    #[test]
    fn test_clipboard_error() {
        let error = clipboard_error(&"no display");
        assert_eq!(error.to_string(), "Clipboard error: no display");
    }

    // Tests plain I/O errors convert and can be tagged
    // Verified by discarding the operation name
    #[test]
    fn test_io_conversion_and_tagging() {
        let converted: RollError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(converted, RollError::Io { operation: "unknown", .. }));

        let tagged = Err::<(), _>(std::io::Error::other("boom")).with_operation("read command");
        assert!(matches!(
            tagged,
            Err(RollError::Io {
                operation: "read command",
                ..
            })
        ));
    }
}
