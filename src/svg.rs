use std::f32::consts::PI;
use std::fmt::Write as _;

use crate::age::{AVERAGE_LIFE_EXPECTANCY, AgeStats, CalendarAge};
use crate::card::{Card, group_thousands};
use crate::stats::LifeStats;

const WIDTH: f32 = 720.0;
const MARGIN: f32 = 24.0;
const CARD_GAP: f32 = 32.0;
const CARD_PADDING: f32 = 24.0;
const HEADER_HEIGHT: f32 = 120.0;
const LINE_HEIGHT: f32 = 20.0;
const CHART_RADIUS: f32 = 110.0;
const GRID_RINGS: usize = 4;
const LEGEND_SWATCH: f32 = 12.0;
const BAR_HEIGHT: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub grid: &'static str,
    pub track: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#0d1117",
                card: "#161b22",
                text: "#c9d1d9",
                muted: "#8b949e",
                grid: "rgba(255, 255, 255, 0.1)",
                track: "#30363d",
            },
            Theme::Light => ThemeColors {
                bg: "#f9fafb",
                card: "#ffffff",
                text: "#111827",
                muted: "#4b5563",
                grid: "rgba(0, 0, 0, 0.1)",
                track: "#e5e7eb",
            },
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Theme::Dark => "life_dark.svg",
            Theme::Light => "life_light.svg",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Point on a circle, angles in degrees clockwise from 12 o'clock.
fn polar(cx: f32, cy: f32, r: f32, degrees: f32) -> (f32, f32) {
    let radians = (degrees - 90.0) * PI / 180.0;
    (cx + r * radians.cos(), cy + r * radians.sin())
}

fn sector_path(cx: f32, cy: f32, r: f32, start: f32, end: f32) -> String {
    let (x0, y0) = polar(cx, cy, r, start);
    let (x1, y1) = polar(cx, cy, r, end);
    format!("M {cx:.1} {cy:.1} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 0 1 {x1:.2} {y1:.2} Z")
}

// Polar area chart: equal angles, radius linear in value.

fn build_chart(card: &Card, cx: f32, cy: f32, colors: &ThemeColors) -> String {
    let mut out = String::new();

    for ring in 1..=GRID_RINGS {
        let r = CHART_RADIUS * ring as f32 / GRID_RINGS as f32;
        let _ = writeln!(
            out,
            r#"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="none" stroke="{}"/>"#,
            colors.grid
        );
    }

    let sweep = 360.0 / card.segments.len() as f32;
    for (i, segment) in card.segments.iter().enumerate() {
        if card.radial_max <= 0.0 || segment.value <= 0.0 {
            continue;
        }
        let r = CHART_RADIUS * (segment.value / card.radial_max) as f32;
        let start = sweep * i as f32;
        let _ = writeln!(
            out,
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="1"/>"#,
            sector_path(cx, cy, r, start, start + sweep),
            segment.palette.fill,
            segment.palette.stroke
        );
    }

    out
}

fn build_legend(card: &Card, x: f32, top: f32) -> String {
    let mut out = String::new();

    for (i, segment) in card.segments.iter().enumerate() {
        let y = top + i as f32 * LINE_HEIGHT * 1.5;
        let value = if i == card.segments.len() - 1 {
            format!("{}/10", card.projection.activity.impact_level)
        } else {
            format!("{} times", group_thousands(segment.value as u64))
        };

        let _ = writeln!(
            out,
            r#"<rect x="{x:.1}" y="{:.1}" width="{LEGEND_SWATCH}" height="{LEGEND_SWATCH}" fill="{}" stroke="{}"/>
<text x="{:.1}" y="{y:.1}"><tspan class="key">{}</tspan><tspan class="muted">: {}</tspan></text>"#,
            y - LEGEND_SWATCH + 1.0,
            segment.palette.fill,
            segment.palette.stroke,
            x + LEGEND_SWATCH + 8.0,
            escape_xml(&segment.label),
            value
        );
    }

    out
}

fn build_progress_bar(
    label: &str,
    count: u64,
    percent: f64,
    fill: &str,
    (x, y): (f32, f32),
    width: f32,
    colors: &ThemeColors,
) -> String {
    let filled = width * (percent.clamp(0.0, 100.0) / 100.0) as f32;

    format!(
        r#"<text x="{x:.1}" y="{y:.1}"><tspan class="key">{label}</tspan><tspan class="muted"> {} ({percent:.1}%)</tspan></text>
<rect x="{x:.1}" y="{:.1}" width="{width:.1}" height="{BAR_HEIGHT}" rx="5" fill="{}"/>
<rect x="{x:.1}" y="{:.1}" width="{filled:.1}" height="{BAR_HEIGHT}" rx="5" fill="{fill}"/>
"#,
        group_thousands(count),
        y + 8.0,
        colors.track,
        y + 8.0,
    )
}

// Builds one card and returns (svg, height)

fn build_card(card: &Card, top: f32, colors: &ThemeColors) -> (String, f32) {
    let activity = card.projection.activity;
    let left = MARGIN + CARD_PADDING;
    let inner_width = WIDTH - 2.0 * (MARGIN + CARD_PADDING);
    let mut body = String::new();

    let mut y = top + CARD_PADDING + 18.0;
    let _ = writeln!(
        body,
        r#"<text x="{left:.1}" y="{y:.1}" class="title">{}</text>"#,
        escape_xml(activity.name)
    );
    y += LINE_HEIGHT + 4.0;
    let _ = writeln!(
        body,
        r#"<text x="{left:.1}" y="{y:.1}" class="muted">{}</text>"#,
        escape_xml(activity.description)
    );

    let cx = left + CHART_RADIUS;
    let cy = y + 20.0 + CHART_RADIUS;
    body.push_str(&build_chart(card, cx, cy, colors));
    body.push_str(&build_legend(
        card,
        cx + CHART_RADIUS + 40.0,
        cy - 2.0 * LINE_HEIGHT * 1.5 + 4.0,
    ));

    y = cy + CHART_RADIUS + 36.0;
    body.push_str(&build_progress_bar(
        "Times done",
        card.projection.times_done,
        card.percentage_done,
        card.segments[0].palette.fill,
        (left, y),
        inner_width,
        colors,
    ));
    y += 2.0 * LINE_HEIGHT;
    body.push_str(&build_progress_bar(
        "Times left",
        card.projection.times_left,
        card.percentage_left,
        card.segments[1].palette.fill,
        (left, y),
        inner_width,
        colors,
    ));

    y += 2.0 * LINE_HEIGHT + 8.0;
    let _ = writeln!(
        body,
        r#"<text x="{left:.1}" y="{y:.1}"><tspan class="key">Every year: </tspan><tspan class="value">{}</tspan></text>"#,
        escape_xml(activity.yearly_impact)
    );

    for fact in activity.fun_facts {
        y += LINE_HEIGHT;
        let _ = writeln!(
            body,
            r#"<text x="{left:.1}" y="{y:.1}" class="muted">• {}</text>"#,
            escape_xml(fact)
        );
    }

    let height = y - top + CARD_PADDING;
    let svg = format!(
        r#"<rect x="{MARGIN}" y="{top:.1}" width="{:.1}" height="{height:.1}" rx="12" fill="{}"/>
{body}"#,
        WIDTH - 2.0 * MARGIN,
        colors.card
    );

    (svg, height)
}

fn build_header(stats: &LifeStats, calendar: &CalendarAge) -> String {
    let lived = group_thousands(stats.days_lived.max(0) as u64);
    let left = group_thousands(stats.days_left.floor() as u64);

    format!(
        r#"<text x="{MARGIN}" y="48" class="heading">Remaining Life</text>
<text x="{MARGIN}" y="78"><tspan class="key">Age: </tspan><tspan class="value">{calendar}</tspan></text>
<text x="{MARGIN}" y="100"><tspan class="value">{lived}</tspan><tspan class="muted"> days lived, </tspan><tspan class="value">{left}</tspan><tspan class="muted"> days left of an average {AVERAGE_LIFE_EXPECTANCY} years</tspan></text>
"#
    )
}

/// Main SVG generation function
pub fn generate_svg(
    stats: &LifeStats,
    age: &AgeStats,
    calendar: &CalendarAge,
    theme: Theme,
) -> String {
    let colors = theme.colors();

    let mut cards = String::new();
    let mut top = HEADER_HEIGHT;
    for projection in &stats.activities {
        let card = Card::new(projection, age);
        let (svg, height) = build_card(&card, top, &colors);
        cards.push_str(&svg);
        top += height + CARD_GAP;
    }
    let h = top - CARD_GAP + MARGIN;

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="Inter,Helvetica,Arial,sans-serif"
     font-size="14px">

<style>
.heading {{ fill: {text}; font-size: 28px; font-weight: 700; }}
.title   {{ fill: {text}; font-size: 18px; font-weight: 600; }}
.key     {{ fill: {text}; }}
.value   {{ fill: {text}; font-weight: 600; }}
.muted   {{ fill: {muted}; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}"/>

<!-- HEADER -->
{header}
<!-- CARDS -->
{cards}
</svg>
"#,
        w = WIDTH,
        h = h,
        bg = colors.bg,
        text = colors.text,
        muted = colors.muted,
        header = build_header(stats, calendar),
        cards = cards
    )
}
