//! Alert card rendering.

use super::{escape_html, localize_timestamp};
use crate::api::Alert;

/// Placeholder shown in the alerts list when nothing is active.
pub const NO_ALERTS_HTML: &str =
    "<div class=\"alerts-empty\">No active alerts. System healthy. 🟢</div>";

/// A rendered alert with its dismiss affordance.
///
/// `dismiss_id` is what the presentation layer hands back to
/// [`AlertsController::dismiss`](crate::alerts::AlertsController::dismiss)
/// when the button is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertCard {
    pub dismiss_id: String,
    pub title: String,
    pub message: String,
    pub analysis: String,
    pub timestamp_label: String,
}

impl AlertCard {
    pub fn html(&self) -> String {
        format!(
            concat!(
                "<div class=\"alert-card\" data-alert-id=\"{id}\">",
                "<div class=\"alert-body\">",
                "<h3>🚨 {title}</h3>",
                "<div class=\"alert-message\">{message}</div>",
                "<div class=\"alert-analysis\">💡 <strong>Analysis:</strong> {analysis}</div>",
                "<div class=\"alert-time\">{time}</div>",
                "</div>",
                "<button class=\"alert-dismiss\" data-dismiss=\"{id}\">Dismiss</button>",
                "</div>"
            ),
            id = escape_html(&self.dismiss_id),
            title = escape_html(&self.title),
            message = escape_html(&self.message),
            analysis = escape_html(&self.analysis),
            time = escape_html(&self.timestamp_label),
        )
    }
}

pub fn render_alert_card(alert: &Alert) -> AlertCard {
    AlertCard {
        dismiss_id: alert.id.clone(),
        title: format!("{} Error Spike", alert.service),
        message: alert.message.clone(),
        analysis: alert.analysis.clone(),
        timestamp_label: localize_timestamp(&alert.timestamp),
    }
}
