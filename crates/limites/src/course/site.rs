//! Static HTML rendering of course pages.
//!
//! Every page shares one layout: header with the print link, the lesson
//! sidebar, and the routed content. Formulas are emitted as TeX inside
//! `math` spans for the in-browser typesetter (KaTeX auto-render, loaded
//! from a CDN together with the chart library); a formula that fails
//! `Formula::check` is emitted as escaped source in a `math-error` span
//! instead, so a bad formula never breaks the page.

use std::fmt::Write;

use super::blocks::{parse_inline, Block, Formula, Inline, MathMode};
use super::lessons::{page, Page};
use super::routes::Route;
use crate::chart::{encode_json, ChartError, Registry};
use crate::epsdelta::EPSILON_SLIDER;
use crate::visualizer::{
    format_value, slider_table, Visualizer, CAPTION, DELTA_LABEL, EPSILON_LABEL, HEADING,
};

pub const SITE_TITLE: &str = "Curso Interactivo de Límites 🧠";
pub const PRINT_HREF: &str = "/Curso de Límites.pdf";
pub const PRINT_LABEL: &str = "🖨️ Imprimir Documento Completo";
pub const SIDEBAR_TITLE: &str = "Índice de Lecciones 📖";

pub const KATEX_CSS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.11/dist/katex.min.css";
pub const KATEX_JS: &str = "https://cdn.jsdelivr.net/npm/katex@0.16.11/dist/katex.min.js";
pub const KATEX_AUTO_RENDER_JS: &str =
    "https://cdn.jsdelivr.net/npm/katex@0.16.11/dist/contrib/auto-render.min.js";
pub const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.4/dist/chart.umd.min.js";

const CSS_STYLES: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; color: #1F2937; }
.header { display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; background: #1F2937; color: #fff; }
.print-btn { color: #FDBA74; text-decoration: none; }
.container-fluid .row { display: flex; }
.sidebar { width: 260px; padding: 16px; background: #F9FAFB; border-right: 1px solid #E5E7EB; }
.sidebar ul { list-style: none; padding: 0; }
.nav-link { display: block; padding: 6px 8px; color: #374151; text-decoration: none; }
.nav-link.active { background: #FDBA74; border-radius: 4px; }
.content { flex: 1; padding: 24px; max-width: 900px; }
.callout { border-left: 4px solid #6B7280; padding: 12px 16px; margin: 16px 0; background: #F3F4F6; }
.callout-definition { border-color: #2563EB; }
.callout-history { border-color: #92400E; }
.callout-example { border-color: #059669; }
.callout-formula { margin: 12px 0; overflow-x: auto; }
.math-error { font-family: monospace; color: #B91C1C; }
table { border-collapse: collapse; }
td, th { border: 1px solid #E5E7EB; padding: 6px 12px; }
"#;

/// Typesets every `\(..\)` and `\[..\]` span once the page has loaded.
const MATH_SCRIPT: &str = r#"<script>
document.addEventListener("DOMContentLoaded", function () {
  renderMathInElement(document.body, {
    delimiters: [
      { left: "\\[", right: "\\]", display: true },
      { left: "\\(", right: "\\)", display: false }
    ],
    throwOnError: false
  });
});
</script>"#;

/// Draws the chart from the embedded config and redraws the bands on slider
/// input, using the precomputed per-position table.
const VISUALIZER_SCRIPT: &str = r#"<script>
(function () {
  var config = JSON.parse(document.getElementById("epsilon-delta-config").textContent);
  var table = JSON.parse(document.getElementById("epsilon-delta-table").textContent);
  var chart = new Chart(document.getElementById("epsilon-delta-chart"), config);
  var slider = document.getElementById("epsilon-slider");
  var epsOut = document.querySelector(".epsilon-value");
  var deltaOut = document.querySelector(".delta-value");
  slider.addEventListener("input", function () {
    var v = parseFloat(slider.value);
    if (isNaN(v) || table.length === 0) return;
    var row = table.reduce(function (best, r) {
      return Math.abs(r.epsilon - v) < Math.abs(best.epsilon - v) ? r : best;
    });
    chart.data.datasets[1].data.forEach(function (p) { p.y = row.upper; });
    chart.data.datasets[2].data.forEach(function (p) { p.y = row.lower; });
    chart.update();
    epsOut.textContent = row.epsilon_text;
    deltaOut.textContent = row.delta_text;
  });
})();
</script>"#;

/// JSON safe to place inside a `<script>` element.
fn script_json(json: String) -> String {
    json.replace("</", "<\\/")
}

/// Escape text for element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// TeX span (or div in display mode); malformed source is shown verbatim.
pub fn render_formula(f: &Formula) -> String {
    let tex = escape(&f.tex);
    match (f.check(), f.mode) {
        (Err(err), _) => format!(
            "<span class=\"math-error\" title=\"{}\">{tex}</span>",
            escape(&err.to_string())
        ),
        (Ok(()), MathMode::Inline) => {
            format!("<span class=\"math math-inline\">\\({tex}\\)</span>")
        }
        (Ok(()), MathMode::Display) => format!(
            "<div class=\"callout-formula\"><div class=\"math math-display\">\\[{tex}\\]</div></div>"
        ),
    }
}

fn render_inline(text: &str) -> String {
    parse_inline(text)
        .into_iter()
        .map(|run| match run {
            Inline::Text(t) => escape(&t),
            Inline::Strong(t) => format!("<strong>{}</strong>", escape(&t)),
            Inline::Math(f) => render_formula(&f),
        })
        .collect()
}

fn render_list(tag: &str, items: &[String]) -> String {
    let mut out = format!("<{tag}>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", render_inline(item));
    }
    let _ = write!(out, "</{tag}>");
    out
}

/// Slider, readout and the initial chart config of a freshly mounted visualizer.
fn render_visualizer(registry: &Registry) -> Result<String, ChartError> {
    let frame = Visualizer::mount().frame(registry)?;
    let config = script_json(frame.chart.to_json()?);
    let table = script_json(encode_json(&slider_table())?);
    let eps = format_value(frame.epsilon);
    let mut out = String::new();
    let _ = write!(
        out,
        "<section class=\"epsilon-delta mt-4 mb-5\"><h4>{heading}</h4>\
         <div class=\"chart\" style=\"height: 300px; margin-bottom: 20px\">\
         <canvas id=\"epsilon-delta-chart\"></canvas></div>\
         <script type=\"application/json\" id=\"epsilon-delta-config\">{config}</script>\
         <script type=\"application/json\" id=\"epsilon-delta-table\">{table}</script>\
         <div class=\"mb-3\"><label for=\"epsilon-slider\"><strong>{eps_label}</strong> \
         <span class=\"epsilon-value\">{eps}</span></label>\
         <input id=\"epsilon-slider\" type=\"range\" min=\"{min}\" max=\"{max}\" step=\"{step}\" \
         value=\"{eps}\" style=\"width: 100%; margin-top: 10px\"></div>\
         <p><strong>{delta_label}</strong> <span class=\"delta-value\">{delta}</span></p>\
         <p class=\"caption\">{caption}</p></section>{script}",
        heading = escape(HEADING),
        eps_label = escape(EPSILON_LABEL),
        min = EPSILON_SLIDER.min,
        max = EPSILON_SLIDER.max,
        step = EPSILON_SLIDER.step,
        delta_label = escape(DELTA_LABEL),
        delta = format_value(frame.delta.abs()),
        caption = escape(CAPTION),
        script = VISUALIZER_SCRIPT,
    );
    Ok(out)
}

fn render_block(block: &Block, registry: &Registry, out: &mut String) -> Result<(), ChartError> {
    match block {
        Block::Subheading(s) => {
            let _ = write!(out, "<p><strong>{}</strong></p>", render_inline(s));
        }
        Block::Paragraph(s) => {
            let _ = write!(out, "<p>{}</p>", render_inline(s));
        }
        Block::Callout { kind, body } => {
            let _ = write!(
                out,
                "<div class=\"{}\"><strong>{}</strong> ",
                kind.css_class(),
                escape(kind.label())
            );
            for b in body {
                render_block(b, registry, out)?;
            }
            out.push_str("</div>");
        }
        Block::Formula(f) => out.push_str(&render_formula(f)),
        Block::Bullets(items) => out.push_str(&render_list("ul", items)),
        Block::Steps(items) => out.push_str(&render_list("ol", items)),
        Block::Exercises { title, items } => {
            let _ = write!(out, "<h4>{}</h4>", escape(title));
            out.push_str(&render_list("ol", items));
        }
        Block::EquivalenceTable { header, rows } => {
            let _ = write!(
                out,
                "<table class=\"table table-bordered\"><thead><tr><th>{}</th><th>{}</th></tr></thead><tbody>",
                escape(&header.0),
                escape(&header.1)
            );
            for (a, b) in rows {
                let _ = write!(
                    out,
                    "<tr><td>{}</td><td>{}</td></tr>",
                    render_formula(&Formula::inline(a.as_str())),
                    render_formula(&Formula::inline(b.as_str()))
                );
            }
            out.push_str("</tbody></table>");
        }
        Block::Visualizer => out.push_str(&render_visualizer(registry)?),
    }
    Ok(())
}

fn render_sidebar(current: Route) -> String {
    let mut out = format!(
        "<nav class=\"sidebar\"><h5>{}</h5><ul class=\"nav flex-column\">",
        escape(SIDEBAR_TITLE)
    );
    for r in Route::ALL {
        let (class, aria) = if r == current {
            ("nav-link active", " aria-current=\"page\"")
        } else {
            ("nav-link", "")
        };
        let _ = write!(
            out,
            "<li class=\"nav-item\"><a href=\"{}\" class=\"{class}\"{aria}>{}</a></li>",
            escape(r.path()),
            escape(r.nav_label())
        );
    }
    out.push_str("</ul></nav>");
    out
}

/// Main content of one page (no layout).
pub fn render_content(page: &Page, registry: &Registry) -> Result<String, ChartError> {
    let tag = if page.route == Route::Home { "h1" } else { "h2" };
    let mut out = format!("<div><{tag}>{}</{tag}>", escape(page.title));
    for block in &page.blocks {
        render_block(block, registry, &mut out)?;
    }
    out.push_str("</div>");
    Ok(out)
}

/// Full HTML document for `route`.
pub fn render_page(route: Route, registry: &Registry) -> Result<String, ChartError> {
    let page = page(route);
    let content = render_content(&page, registry)?;
    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<link rel=\"stylesheet\" href=\"{katex_css}\">\n\
         <script defer src=\"{katex_js}\"></script>\n\
         <script defer src=\"{auto_render_js}\"></script>\n\
         <script src=\"{chart_js}\"></script>\n<style>{css}</style>\n</head>\n<body>\n\
         <div class=\"App\">\
         <header class=\"header\"><h3>{site}</h3><a href=\"{href}\" target=\"_blank\" \
         rel=\"noopener noreferrer\" class=\"print-btn\">{print}</a></header>\
         <div class=\"container-fluid\"><div class=\"row\">{sidebar}\
         <main class=\"content\">{content}</main></div></div></div>\n{math_script}\n\
         </body>\n</html>\n",
        title = escape(page.title),
        katex_css = KATEX_CSS,
        katex_js = KATEX_JS,
        auto_render_js = KATEX_AUTO_RENDER_JS,
        chart_js = CHART_JS,
        css = CSS_STYLES,
        math_script = MATH_SCRIPT,
        site = escape(SITE_TITLE),
        href = escape(PRINT_HREF),
        print = escape(PRINT_LABEL),
        sidebar = render_sidebar(route),
    ))
}

/// Every page, in sidebar order.
pub fn render_site(registry: &Registry) -> Result<Vec<(Route, String)>, ChartError> {
    Route::ALL
        .into_iter()
        .map(|r| render_page(r, registry).map(|html| (r, html)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{self, ChartComponent};

    #[test]
    fn escape_covers_markup() {
        assert_eq!(
            escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn malformed_formula_renders_source() {
        let html = render_formula(&Formula::display(r"\frac{1}{2"));
        assert!(html.starts_with("<span class=\"math-error\""));
        assert!(html.contains(r"\frac{1}{2"));
        let ok = render_formula(&Formula::inline("x < 1"));
        assert_eq!(ok, "<span class=\"math math-inline\">\\(x &lt; 1\\)</span>");
    }

    #[test]
    fn lesson_two_embeds_initial_frame() {
        let html = render_page(Route::EpsilonDelta, chart::init()).unwrap();
        assert!(html.contains("<span class=\"epsilon-value\">1.00</span>"));
        assert!(html.contains("<span class=\"delta-value\">0.24</span>"));
        assert!(html.contains(
            "type=\"range\" min=\"0.1\" max=\"2\" step=\"0.01\" value=\"1.00\""
        ));
        assert!(html.contains("\"type\":\"line\""));
        assert!(html.contains("href=\"/leccion2\" class=\"nav-link active\" aria-current=\"page\""));
    }

    #[test]
    fn layout_is_shared() {
        for (route, html) in render_site(chart::init()).unwrap() {
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.contains(SIDEBAR_TITLE));
            assert!(html.contains(PRINT_LABEL));
            assert!(html.contains("class=\"nav-link active\""));
            assert_eq!(html.contains("epsilon-delta-config"), route == Route::EpsilonDelta);
            assert!(!html.contains("class=\"math-error\""), "{route:?}");
            assert!(html.contains(&format!("<script defer src=\"{KATEX_AUTO_RENDER_JS}\">")));
            assert!(html.contains("renderMathInElement(document.body"));
            assert!(!html.contains("/styles.css"));
        }
    }

    #[test]
    fn lesson_two_ships_client_code() {
        let html = render_page(Route::EpsilonDelta, chart::init()).unwrap();
        for src in [KATEX_JS, KATEX_AUTO_RENDER_JS, CHART_JS] {
            assert!(html.contains(&format!("src=\"{src}\"")), "{src}");
        }
        assert!(html.contains(&format!("<link rel=\"stylesheet\" href=\"{KATEX_CSS}\">")));
        assert!(html.contains("new Chart(document.getElementById(\"epsilon-delta-chart\")"));
        assert!(html.contains("slider.addEventListener(\"input\""));

        let start_tag = "<script type=\"application/json\" id=\"epsilon-delta-table\">";
        let start = html.find(start_tag).unwrap() + start_tag.len();
        let end = start + html[start..].find("</script>").unwrap();
        let table: serde_json::Value = serde_json::from_str(&html[start..end]).unwrap();
        let rows = table.as_array().unwrap();
        assert_eq!(rows.len(), EPSILON_SLIDER.positions().len());
        assert_eq!(rows[90]["epsilon_text"], "1.00");
        assert_eq!(rows[90]["delta_text"], "0.24");
        assert_eq!(rows[90]["upper"], 5.0);
        assert_eq!(rows[190]["lower"], 2.0);
    }

    #[test]
    fn script_json_cannot_close_the_element() {
        assert_eq!(script_json("\"</script>\"".to_string()), "\"<\\/script>\"");
    }

    #[test]
    fn home_uses_h1() {
        let html = render_page(Route::Home, chart::init()).unwrap();
        assert!(html.contains("<h1>Curso de Límites para Ciencias de la Computación</h1>"));
        assert!(html.contains("<strong>Autor:</strong>"));
    }

    #[test]
    fn chart_errors_only_affect_the_visualizer_page() {
        let bare = Registry::with([ChartComponent::Title]);
        assert!(render_page(Route::Home, &bare).is_ok());
        assert_eq!(
            render_page(Route::EpsilonDelta, &bare),
            Err(ChartError::Unregistered(ChartComponent::LineElement))
        );
    }
}
