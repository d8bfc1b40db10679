//! String formatting utilities for UI rendering.

use uuid::Uuid;

/// Format milliliters as human-readable volume.
pub fn format_ml(ml: u32) -> String {
    if ml >= 1000 {
        format!("{:.2} L", f64::from(ml) / 1000.0)
    } else {
        format!("{} ml", ml)
    }
}

/// Render a fixed-width progress bar for a percentage.
///
/// The fill caps at 100% even when the percentage runs over.
pub fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width) / 100;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

/// Format a short ID from a UUID (first 8 characters).
pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ml() {
        assert_eq!(format_ml(0), "0 ml");
        assert_eq!(format_ml(850), "850 ml");
        assert_eq!(format_ml(1000), "1.00 L");
        assert_eq!(format_ml(2350), "2.35 L");
    }

    #[test]
    fn test_progress_bar_fill() {
        assert_eq!(progress_bar(0, 10), "[          ]");
        assert_eq!(progress_bar(50, 10), "[=====     ]");
        assert_eq!(progress_bar(100, 10), "[==========]");
        // Overfull days stay within the bar.
        assert_eq!(progress_bar(140, 10), "[==========]");
    }

    #[test]
    fn test_short_id_length() {
        let id = Uuid::new_v4();
        assert_eq!(short_id(&id).len(), 8);
    }
}
