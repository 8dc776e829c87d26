//! Site Rendering
//!
//! Builds the single page as one HTML document. Sections appear in a
//! fixed order; only the monitoring section depends on data.

pub mod dashboard;
pub mod html;
pub mod sections;

pub use dashboard::{alert_classes, monitoring_section};
pub use sections::PRODUCT_NAME;

use chrono::{Datelike, Utc};

use crate::monitoring::DashboardView;

/// Render the complete page for a derived dashboard view
pub fn render_page(view: &DashboardView) -> String {
    render_page_for_year(view, Utc::now().year())
}

/// Render the complete page with an explicit footer year
pub fn render_page_for_year(view: &DashboardView, year: i32) -> String {
    let body = [
        sections::navigation(),
        sections::hero(),
        sections::portals(),
        sections::features(),
        sections::about(),
        dashboard::monitoring_section(view),
        sections::creator(),
        sections::footer(year),
    ]
    .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="healthhub-data-origin" content="{origin}">
<title>{title}</title>
<script src="https://cdn.tailwindcss.com"></script>
<style>html {{ scroll-behavior: smooth; }}</style>
</head>
<body class="min-h-screen bg-white">
{body}
</body>
</html>
"#,
        origin = view.origin,
        title = PRODUCT_NAME,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitoring::{generate_synthetic_metrics, DataOrigin, HealthSnapshot};

    #[test]
    fn test_sections_in_order() {
        let view = DashboardView::derive(&HealthSnapshot {
            metrics: generate_synthetic_metrics(),
            alerts: vec![],
            origin: DataOrigin::Synthetic,
        });

        let html = render_page_for_year(&view, 2026);
        let order = [
            "<nav",
            r#"id="home""#,
            r#"id="portals""#,
            r#"id="features""#,
            r#"id="about""#,
            r#"id="monitoring""#,
            r#"id="creator""#,
            r#"id="contact""#,
        ];

        let mut last = 0;
        for marker in order {
            let pos = html[last..]
                .find(marker)
                .map(|p| p + last)
                .unwrap_or_else(|| panic!("{} missing or out of order", marker));
            last = pos;
        }

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"content="synthetic""#));
        assert!(html.contains("2026 AI Healthcare Hub"));
    }
}
