//! City Climate Dashboard
//!
//! A single page with a world map of the snapshot day, the monthly aggregate
//! table (downloadable as CSV), a month by city comparison table, the maximum
//! temperature lines of all cities, and two city-filtered charts.
//!
//! Data flow:
//! 1. `build.rs` copies the four fixture CSVs into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount the CSVs are parsed, aggregated once and wrapped in a session
//!    registry; every slot is drawn from the session's initial render.
//! 4. When a city selector changes, the new value goes through the registry
//!    and only the slots bound to that selector are redrawn.

use climate_bindings::{
    dashboard::{
        dashboard_registry, BAR_CHART, CITY_COMPARISON_TABLE, CITY_DROPDOWN, CITY_RADIO,
        MAX_TEMP_LINE, MIN_TEMP_LINE, MONTHLY_TABLE, OUTPUTS, WORLD_MAP,
    },
    InputId, OutputId, SessionId, SessionRegistry,
};
use climate_chart_ui::components::{
    ChartHeader, CityDropdown, CityRadio, DownloadButton, ErrorDisplay, LoadingSpinner,
    SlotContainer,
};
use climate_chart_ui::js_bridge;
use climate_chart_ui::state::{AppState, BROWSER_SESSION};
use climate_obs::DatasetStore;
use climate_views::{DashboardConfig, DashboardData};
use dioxus::prelude::*;
use std::sync::Arc;

const CLIMATE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/climate_final.csv"));
const TEMPERATURE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/df_temp.csv"));
const MONTHLY_AVG_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/df_monthly_avg.csv"));
const MONTHLY_FINAL_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/df_monthly_final.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("climate-dashboard-root"))
        .launch(App);
}

/// One config for both the selector signals and the binding graph.
fn dashboard_config() -> DashboardConfig {
    DashboardConfig::default()
}

/// Parse the embedded datasets and derive every static aggregate.
fn load_registry(config: DashboardConfig) -> Result<SessionRegistry<DashboardData>, String> {
    let store = DatasetStore::from_csv(
        CLIMATE_CSV,
        TEMPERATURE_CSV,
        MONTHLY_AVG_CSV,
        MONTHLY_FINAL_CSV,
    )
    .map_err(|e| format!("Failed to load climate data: {}", e))?;
    let data = DashboardData::build(store, config)
        .map_err(|e| format!("Failed to aggregate climate data: {}", e))?;
    dashboard_registry(data).map_err(|e| format!("Failed to wire the dashboard: {}", e))
}

fn draw_slot(registry: &SessionRegistry<DashboardData>, session: &SessionId, output: OutputId) {
    match registry.view(session, output.as_str()) {
        Ok(view) => js_bridge::render_view(output.as_str(), &view),
        Err(e) => {
            log::error!("cannot draw {}: {}", output, e);
            js_bridge::destroy_chart(output.as_str());
        }
    }
}

/// Push a selector value into the session and redraw what it recomputed.
fn apply_selection(mut state: AppState, input: InputId, value: &str) {
    let Some((registry, session)) = state.active() else {
        return;
    };
    match registry.select(&session, input.as_str(), value) {
        Ok(outputs) => {
            for output in outputs {
                draw_slot(&registry, &session, output);
            }
        }
        Err(e) => {
            log::error!("selection {}={} failed: {}", input, value, e);
            state.error_msg.set(Some(e.to_string()));
        }
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(&dashboard_config()));

    // ─── Effect 1: load data and draw every slot once on mount ───
    use_effect(move || {
        let registry = match load_registry(dashboard_config()) {
            Ok(registry) => Arc::new(registry),
            Err(message) => {
                log::error!("{}", message);
                state.error_msg.set(Some(message));
                state.loading.set(false);
                return;
            }
        };
        let session = registry.open(BROWSER_SESSION);

        js_bridge::init_charts();
        for output in OUTPUTS {
            draw_slot(&registry, &session, output);
        }

        state.registry.set(Some(registry));
        state.session.set(Some(session));
        state.loading.set(false);
    });

    // ─── Effect 2: dropdown drives the bar chart ───
    use_effect(move || {
        let city = (state.dropdown_city)();
        apply_selection(state, CITY_DROPDOWN, &city);
    });

    // ─── Effect 3: radio drives the minimum temperature line ───
    use_effect(move || {
        let city = (state.radio_city)();
        apply_selection(state, CITY_RADIO, &city);
    });

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 { style: "font-size: 24px;", "City Climate Dashboard" }

            ErrorDisplay {}

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                SlotContainer {
                    slot: WORLD_MAP.as_str().to_string(),
                    min_height: 380,
                    ChartHeader {
                        title: "Average temperature around the world".to_string(),
                        note: "Snapshot of a single day".to_string(),
                    }
                }

                SlotContainer {
                    slot: MONTHLY_TABLE.as_str().to_string(),
                    ChartHeader { title: "Monthly averages per city".to_string() }
                    DownloadButton {}
                }

                SlotContainer {
                    slot: CITY_COMPARISON_TABLE.as_str().to_string(),
                    ChartHeader { title: "Cities side by side".to_string() }
                }

                SlotContainer {
                    slot: MAX_TEMP_LINE.as_str().to_string(),
                    min_height: 380,
                    ChartHeader { title: "Average maximum temperature".to_string() }
                }

                SlotContainer {
                    slot: BAR_CHART.as_str().to_string(),
                    min_height: 380,
                    ChartHeader { title: "Monthly temperature of one city".to_string() }
                    CityDropdown {}
                }

                SlotContainer {
                    slot: MIN_TEMP_LINE.as_str().to_string(),
                    min_height: 380,
                    ChartHeader { title: "Average minimum temperature".to_string() }
                    CityRadio {}
                }
            }
        }
    }
}
