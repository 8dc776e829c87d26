//! Monitoring Section
//!
//! Renders a `DashboardView` as the "Health Monitoring Dashboard" part
//! of the page. All store-provided text goes through `escape`.

use std::fmt::Write;

use super::html::{escape, link_target, thousands};
use super::sections::DIAGNOSIS_URL;
use crate::monitoring::{AlertRecord, AlertType, DashboardView, Sparkline, Trend, TrendDirection};

/// Tailwind classes for an alert banner and its icon
pub fn alert_classes(alert_type: AlertType) -> (&'static str, &'static str) {
    match alert_type {
        AlertType::Critical => ("bg-red-100 border-red-500 text-red-800", "text-red-600"),
        AlertType::Warning => ("bg-yellow-100 border-yellow-500 text-yellow-800", "text-yellow-600"),
        AlertType::Informational => ("bg-blue-100 border-blue-500 text-blue-800", "text-blue-600"),
    }
}

/// Render the whole monitoring section
pub fn monitoring_section(view: &DashboardView) -> String {
    let mut out = String::with_capacity(16 * 1024);

    out.push_str(
        r#"<section id="monitoring" class="min-h-screen py-20 px-4 bg-gradient-to-br from-blue-50 via-cyan-50 to-blue-50">
<div class="max-w-7xl mx-auto">
  <div class="text-center mb-12">
    <h1 class="text-5xl font-bold text-gray-900 mb-4">Health Monitoring Dashboard</h1>
    <p class="text-xl text-gray-600 max-w-3xl mx-auto">Track your vitals, analyze trends, and stay on top of your health with AI-powered insights</p>
  </div>
"#,
    );

    out.push_str(&alert_list(&view.alerts));
    out.push_str(&vital_cards(view));
    out.push_str(&daily_cards(view));
    out.push_str(&assessment_banner());
    out.push_str(INSIGHTS);
    out.push_str("</div>\n</section>\n");

    out
}

fn alert_list(alerts: &[AlertRecord]) -> String {
    if alerts.is_empty() {
        return String::new();
    }

    let mut out = String::from(r#"<div class="mb-8 space-y-3">"#);
    for alert in alerts.iter().filter(|a| !a.is_read) {
        let (banner, icon) = alert_classes(alert.alert_type);
        let value = alert
            .metric_value()
            .map(|v| format!(r#"<p class="text-sm opacity-75 mt-1">Value: {}</p>"#, escape(v)))
            .unwrap_or_default();

        let _ = write!(
            out,
            r#"<div class="p-4 rounded-xl border-l-4 {banner} shadow-sm" data-alert-id="{id}" data-alert-type="{kind}"><div class="flex items-start space-x-3"><span class="{icon}">⚠</span><div class="flex-1"><p class="font-medium">{message}</p>{value}</div></div></div>"#,
            banner = banner,
            id = escape(&alert.id),
            kind = alert.alert_type,
            icon = icon,
            message = escape(&alert.message),
            value = value,
        );
    }
    out.push_str("</div>\n");
    out
}

fn vital_cards(view: &DashboardView) -> String {
    let latest = view.latest.as_ref();

    let heart_rate = latest.map(|m| m.heart_rate.to_string());
    let pressure = latest.map(|m| {
        format!("{}/{}", m.blood_pressure_systolic, m.blood_pressure_diastolic)
    });
    let glucose = latest.map(|m| m.blood_glucose.to_string());
    let weight = latest.map(|m| format!("{:.1}", m.weight));

    let cards = [
        card(
            "❤",
            "bg-red-100",
            trend_badge(&view.trends.heart_rate),
            "Heart Rate",
            heart_rate,
            "BPM",
            view.sparklines.heart_rate.as_ref(),
        ),
        card(
            "🩺",
            "bg-blue-100",
            status_badge("Normal"),
            "Blood Pressure",
            pressure,
            "mmHg",
            view.sparklines.blood_pressure.as_ref(),
        ),
        card(
            "💧",
            "bg-green-100",
            status_badge("Optimal"),
            "Blood Glucose",
            glucose,
            "mg/dL",
            view.sparklines.blood_glucose.as_ref(),
        ),
        card(
            "⚖",
            "bg-purple-100",
            trend_badge(&view.trends.weight),
            "Weight",
            weight,
            "kg",
            view.sparklines.weight.as_ref(),
        ),
    ];

    format!(
        "<div class=\"grid md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8\">{}</div>\n",
        cards.concat()
    )
}

fn card(
    icon: &str,
    icon_bg: &str,
    badge: String,
    title: &str,
    value: Option<String>,
    unit: &str,
    sparkline: Option<&Sparkline>,
) -> String {
    format!(
        r#"<div class="bg-white rounded-2xl shadow-lg p-6"><div class="flex items-center justify-between mb-4"><span class="w-12 h-12 {icon_bg} rounded-xl flex items-center justify-center text-2xl">{icon}</span>{badge}</div><h3 class="text-gray-600 text-sm font-medium mb-1">{title}</h3><p class="text-3xl font-bold text-gray-900 mb-3">{value} <span class="text-lg text-gray-500">{unit}</span></p>{chart}</div>"#,
        icon_bg = icon_bg,
        icon = icon,
        badge = badge,
        title = title,
        value = value.unwrap_or_else(|| "—".to_string()),
        unit = unit,
        chart = sparkline.map(Sparkline::to_svg).unwrap_or_default(),
    )
}

/// Trend arrow and magnitude for a vital sign, where rising is flagged red
fn trend_badge(trend: &Trend) -> String {
    let color = if trend.percent > 0.0 {
        "text-red-600"
    } else {
        "text-green-600"
    };
    let arrow = match trend.direction {
        TrendDirection::Down => "↘",
        TrendDirection::Up | TrendDirection::Flat => "↗",
    };

    format!(
        r#"<div class="flex items-center space-x-1 text-sm {}" data-trend="{}"><span>{}</span><span>{}</span></div>"#,
        color,
        trend.percent,
        arrow,
        trend.magnitude_label()
    )
}

fn status_badge(label: &str) -> String {
    format!(r#"<div class="text-sm text-gray-600">{}</div>"#, label)
}

fn daily_cards(view: &DashboardView) -> String {
    let latest = view.latest.as_ref();
    let steps_trend = &view.trends.steps;
    let steps_color = if steps_trend.percent > 0.0 {
        "text-green-200"
    } else {
        "text-red-200"
    };
    let steps_arrow = if steps_trend.direction == TrendDirection::Down {
        "↘"
    } else {
        "↗"
    };

    let steps = latest
        .map(|m| thousands(m.steps as u64))
        .unwrap_or_else(|| "—".to_string());
    let sleep = latest
        .map(|m| format!("{:.1}h", m.sleep_hours))
        .unwrap_or_else(|| "—".to_string());
    let water = latest
        .map(|m| format!("{:.1}L", m.water_intake))
        .unwrap_or_else(|| "—".to_string());

    let mut out = String::from(r#"<div class="grid md:grid-cols-3 gap-6 mb-8">"#);

    let _ = write!(
        out,
        r#"<div class="bg-gradient-to-br from-orange-500 to-red-500 rounded-2xl shadow-lg p-6 text-white"><div class="flex items-center justify-between mb-4"><span class="text-4xl">👣</span><div class="flex items-center space-x-1 text-sm {color}"><span>{arrow}</span><span>{trend}</span></div></div><h3 class="text-white/90 text-sm font-medium mb-2">Daily Steps</h3><p class="text-4xl font-bold mb-2">{value}</p>{bar}<p class="text-white/80 text-sm">Goal: 10,000 steps</p></div>"#,
        color = steps_color,
        arrow = steps_arrow,
        trend = steps_trend.magnitude_label(),
        value = steps,
        bar = progress_bar(view.progress.steps_percent),
    );

    let _ = write!(
        out,
        r#"<div class="bg-gradient-to-br from-blue-500 to-cyan-500 rounded-2xl shadow-lg p-6 text-white"><div class="flex items-center justify-between mb-4"><span class="text-4xl">🌙</span><div class="text-sm text-white/90">Last night</div></div><h3 class="text-white/90 text-sm font-medium mb-2">Sleep Duration</h3><p class="text-4xl font-bold mb-2">{value}</p>{bar}<p class="text-white/80 text-sm">Recommended: 7-9 hours</p></div>"#,
        value = sleep,
        bar = progress_bar(view.progress.sleep_percent),
    );

    let _ = write!(
        out,
        r#"<div class="bg-gradient-to-br from-teal-500 to-green-500 rounded-2xl shadow-lg p-6 text-white"><div class="flex items-center justify-between mb-4"><span class="text-4xl">💧</span><div class="text-sm text-white/90">Today</div></div><h3 class="text-white/90 text-sm font-medium mb-2">Water Intake</h3><p class="text-4xl font-bold mb-2">{value}</p>{bar}<p class="text-white/80 text-sm">Goal: 2.5-3L per day</p></div>"#,
        value = water,
        bar = progress_bar(view.progress.water_percent),
    );

    out.push_str("</div>\n");
    out
}

fn progress_bar(percent: f64) -> String {
    format!(
        r#"<div class="w-full bg-white/20 rounded-full h-2 mb-2"><div class="bg-white rounded-full h-2" style="width: {:.1}%"></div></div>"#,
        percent
    )
}

fn assessment_banner() -> String {
    format!(
        r#"<div class="bg-gradient-to-br from-blue-600 to-cyan-600 rounded-3xl shadow-2xl p-8 md:p-12 text-white text-center">
  <h2 class="text-3xl md:text-4xl font-bold mb-4">Get Your Personalized Health Analysis</h2>
  <p class="text-xl text-blue-100 mb-8">Submit your symptoms for AI-powered disease prediction and receive a comprehensive health report with personalized recommendations</p>
  <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
    <a href="{url}"{target} class="inline-flex items-center px-8 py-4 bg-white text-blue-600 rounded-xl font-semibold shadow-lg">Start Health Assessment ↗</a>
    <div class="text-blue-100 text-sm"><p class="font-medium">Your detailed report will be available shortly</p><p class="opacity-75">Usually within 24-48 hours</p></div>
  </div>
</div>
"#,
        url = DIAGNOSIS_URL,
        target = link_target(DIAGNOSIS_URL),
    )
}

const INSIGHTS: &str = r#"<div class="mt-8 bg-white rounded-2xl shadow-lg p-8">
  <h3 class="text-2xl font-bold text-gray-900 mb-6">Health Insights &amp; Recommendations</h3>
  <div class="grid md:grid-cols-2 gap-6">
    <div class="border-l-4 border-green-500 pl-4">
      <h4 class="font-semibold text-gray-900 mb-2">Positive Trends</h4>
      <ul class="space-y-2 text-gray-600">
        <li>✓ Your weight is trending downward, indicating good progress</li>
        <li>✓ Sleep patterns are improving with consistent 7+ hours</li>
        <li>✓ Daily step count shows increased physical activity</li>
      </ul>
    </div>
    <div class="border-l-4 border-yellow-500 pl-4">
      <h4 class="font-semibold text-gray-900 mb-2">Areas for Improvement</h4>
      <ul class="space-y-2 text-gray-600">
        <li>! Monitor blood pressure regularly - slight elevation detected</li>
        <li>! Increase water intake to meet daily hydration goals</li>
        <li>! Consider reducing sugar intake - glucose levels elevated</li>
      </ul>
    </div>
  </div>
</div>
"#;
