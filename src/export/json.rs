use crate::error::Result;
use crate::models::InfoMessage;

/// Render a summary as a single-line JSON object
pub fn render_summary(info: &InfoMessage) -> Result<String> {
    Ok(serde_json::to_string(info)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_summary() {
        let info = InfoMessage {
            training_type: "Swimming".to_string(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        };

        let json = render_summary(&info).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"training_type\":\"Swimming\""));
        assert!(json.contains("\"calories\":336.0"));

        let restored: InfoMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, info);
    }
}
