//! Wiring of the city climate dashboard.

use crate::{
    error::Result,
    graph::{BindingGraph, Selector},
    registry::SessionRegistry,
    slot::{InputId, OutputId},
};
use climate_obs::City;
use climate_views::{builders, DashboardConfig, DashboardData, View};

/// City dropdown above the bar chart.
pub const CITY_DROPDOWN: InputId = InputId("dropdown1");
/// City radio buttons above the minimum temperature line.
pub const CITY_RADIO: InputId = InputId("city");

pub const WORLD_MAP: OutputId = OutputId("world-map");
pub const MONTHLY_TABLE: OutputId = OutputId("monthly-table");
pub const CITY_COMPARISON_TABLE: OutputId = OutputId("city-comparison-table");
pub const MAX_TEMP_LINE: OutputId = OutputId("max-temp-line");
pub const BAR_CHART: OutputId = OutputId("bar-chart");
pub const MIN_TEMP_LINE: OutputId = OutputId("min-temp-line");

/// Output slots in page order.
pub const OUTPUTS: [OutputId; 6] = [
    WORLD_MAP,
    MONTHLY_TABLE,
    CITY_COMPARISON_TABLE,
    MAX_TEMP_LINE,
    BAR_CHART,
    MIN_TEMP_LINE,
];

fn world_map(data: &DashboardData, _: &[&str]) -> View {
    View::Chart(builders::world_map(data))
}

fn monthly_table(data: &DashboardData, _: &[&str]) -> View {
    View::Table(builders::monthly_table(data))
}

fn city_comparison_table(data: &DashboardData, _: &[&str]) -> View {
    View::Table(builders::city_comparison_table(data))
}

fn max_temp_line(data: &DashboardData, _: &[&str]) -> View {
    View::Chart(builders::max_temp_lines(data))
}

fn bar_chart(data: &DashboardData, inputs: &[&str]) -> View {
    View::Chart(builders::monthly_bar_chart(data, inputs.first().copied().unwrap_or_default()))
}

fn min_temp_line(data: &DashboardData, inputs: &[&str]) -> View {
    View::Chart(builders::min_temp_line(data, inputs.first().copied().unwrap_or_default()))
}

/// Build the dashboard graph. Both city selectors start at the configured
/// default city.
pub fn dashboard_graph(config: &DashboardConfig) -> Result<BindingGraph<DashboardData>> {
    let cities = City::names();
    let default = config.default_city.name();
    BindingGraph::builder()
        .selector(Selector::new(CITY_DROPDOWN, cities.clone(), default))
        .selector(Selector::new(CITY_RADIO, cities, default))
        .bind(WORLD_MAP, &[], world_map)
        .bind(MONTHLY_TABLE, &[], monthly_table)
        .bind(CITY_COMPARISON_TABLE, &[], city_comparison_table)
        .bind(MAX_TEMP_LINE, &[], max_temp_line)
        .bind(BAR_CHART, &[CITY_DROPDOWN], bar_chart)
        .bind(MIN_TEMP_LINE, &[CITY_RADIO], min_temp_line)
        .build()
}

/// A registry serving the dashboard over `data`.
pub fn dashboard_registry(data: DashboardData) -> Result<SessionRegistry<DashboardData>> {
    let graph = dashboard_graph(data.config())?;
    Ok(SessionRegistry::new(graph, data))
}
