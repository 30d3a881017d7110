// Static stylesheet and the small HTML fragments the widget writes.

use super::config::{FontSize, GaugeConfig};
use super::constants::CLIP_ID_PREFIX;
use super::values::GaugeValues;

pub const COMMON_STYLE: &str = r#"
    <style>
        * {
            font-family: "Open Sans",Helvetica,Arial,sans-serif;
            font-weight: 400;
            font-size: 14px;
        }

        .text-large {
            font-family: Monserrat,"Open Sans",Helvetica,Arial,sans-serif;
            font-size: 32px;
            position:absolute;
            width:95%;
            text-align:center;
        }

        .text-small {
            font-size: 18px;
            position:absolute;
            width:95%;
            text-align:center;
        }

        .vertical-central {
            height: 100%;
            display: flex;
            flex-direction: column;
            justify-content: center;
            text-align: center;
            position:relative
        }
    </style>
"#;

pub const GAUGE_STYLE: &str = r#"
    <style>
        .chart-details {
            position: absolute;
            top: 50%;
            left: 50%;
            transform: translate(-50%, -50%);
        }

        .chart-details h1.value-label {
            line-height: 1;
            font-family: Montserrat,Helvetica,Arial,sans-serif;
            font-weight: 400;
            font-size: 32px;
            text-transform: uppercase;
        }

        .chart-details span.value-breakdown {
            align-items: center;
            font-size: 12px;
        }
    </style>
"#;

pub const CONTAINER_CLASS: &str = "vertical-central";
pub const CHART_CLASS: &str = "gauge-chart";
pub const TEXT_SELECTOR: &str = ".chart-details";

/// Inner HTML of the gauge container: both stylesheets, then the empty chart
/// and text slots. Everything the gauge adds to the page lives under the
/// container, so removing it removes the styles too.
pub fn container_html(font_size: FontSize) -> String {
    format!(
        r#"{}{}<div class="{}"></div><div class="{}"></div>"#,
        COMMON_STYLE,
        GAUGE_STYLE,
        CHART_CLASS,
        text_class(font_size)
    )
}

pub fn text_class(font_size: FontSize) -> &'static str {
    match font_size {
        FontSize::Small => "text-small chart-details",
        FontSize::Large => "text-large chart-details",
    }
}

/// Number the way the host's own labels print it: shortest round-trip digits,
/// no trailing `.0`, no `-0`, exponent form below 1e-6 and from 1e21 up.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        let text = if v > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let sci = format!("{:e}", v);
    let parts = sci
        .split_once('e')
        .and_then(|(mantissa, exp)| Some((mantissa, exp.parse::<i32>().ok()?)));
    match parts {
        Some((mantissa, exp)) if !(-6..21).contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{}", mantissa, sign, exp.abs())
        }
        _ => format!("{}", v),
    }
}

/// One decimal, rounded to the nearest tenth of the exact value with ties
/// going away from zero. `-0` prints as `0.0`; values that round to zero from
/// below keep their sign.
pub fn format_fixed_1(v: f64) -> String {
    let magnitude = v.abs();
    if !v.is_finite() || magnitude >= 1e21 {
        return format_number(v);
    }
    // A double sits exactly halfway between two tenths only when it is an
    // odd number of quarters; `{:.1}` would round those to even.
    let quarters = magnitude * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters % 2.0 == 1.0;
    let digits = if is_tie {
        let tenths = (quarters * 2.5 + 0.5) as u64;
        format!("{}.{}", tenths / 10, tenths % 10)
    } else {
        format!("{:.1}", magnitude)
    };
    if v < 0.0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

pub fn format_percentage(percentage: f64) -> String {
    format!("{}%", format_fixed_1(percentage))
}

/// Inner HTML of the text sub-container.
pub fn label_html(values: &GaugeValues, config: &GaugeConfig) -> String {
    let color = escape_attr(&config.text_color);
    format!(
        r#"
        <h1 class="value-label" style="color:{color}">
        {percentage}
        </h1>
        <span class="value-breakdown" style="color:{color}">
        {nominator} / {denominator}
        </span>
    "#,
        color = color,
        percentage = format_percentage(values.percentage),
        nominator = format_number(values.nominator),
        denominator = format_number(values.denominator),
    )
}

/// Clip-path id unique within the document for the `mount`-th gauge.
pub fn clip_id(mount: u32) -> String {
    format!("{}-{}", CLIP_ID_PREFIX, mount)
}

/// `url(...)` reference to `id` resolved against the page URL, so the clip
/// still resolves when the document carries a `<base>` element.
pub fn clip_path_url(page_href: &str, id: &str) -> String {
    let page = page_href.split('#').next().unwrap_or_default();
    format!("url({}#{})", page, id)
}

pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
