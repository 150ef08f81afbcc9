//! Typed wrappers around JS interop.
//!
//! The D3.js renderers live in `assets/js/*.js` and are evaluated as globals
//! (no ES modules) once D3 has loaded. Views are handed over as JSON object
//! literals, so no string escaping is needed on either side.

use climate_views::{Download, View};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

// Embed the D3 renderers at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static CHART_JS: &str = include_str!("../assets/js/chart.js");
static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('climate JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the renderers with a wait-for-D3 polling loop.
///
/// The scripts are stored on `window` first and evaluated at global scope by
/// indirect eval once `d3` exists, then each entry point is promoted to
/// `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, CHART_JS, DATA_TABLE_JS].join("\n");
    let store_js = format!(
        "window.__climateScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__climateScripts);
                    delete window.__climateScripts;
                    if (typeof renderClimateChart !== 'undefined') window.renderClimateChart = renderClimateChart;
                    if (typeof renderDataTable !== 'undefined') window.renderDataTable = renderDataTable;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__climateChartsReady = true;
                    console.log('climate charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

fn renderer(view: &View) -> &'static str {
    match view {
        View::Chart(_) => "renderClimateChart",
        View::Table(_) => "renderDataTable",
    }
}

/// Render one slot's view into the container with the slot's id.
///
/// Polls until the scripts are initialized and the container exists.
pub fn render_view(container_id: &str, view: &View) {
    let spec = match view {
        View::Chart(chart) => serde_json::to_string(chart),
        View::Table(table) => serde_json::to_string(table),
    };
    let spec = match spec {
        Ok(json) => json,
        Err(e) => {
            log::error!("failed to serialize view for {}: {}", container_id, e);
            return;
        }
    };
    let render = renderer(view);
    call_js(&format!(
        r#"
        (function() {{
            var spec = {spec};
            var poll = setInterval(function() {{
                if (window.__climateChartsReady &&
                    typeof window.{render} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{render}('{container_id}', spec);
                    }} catch(e) {{ console.error('[climate] {render} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Clear whatever was drawn in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Hand the export to the browser as a file download.
pub fn download_file(download: &Download) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(download.content_str()));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&download.filename);
    anchor.click();
    Url::revoke_object_url(&url)
}
