use climate_bindings::dashboard::{dashboard_registry, CITY_DROPDOWN, CITY_RADIO};
use climate_views::DashboardData;

/// Render one slot in a fresh session and return it as pretty JSON.
///
/// `city`, when given, is applied to both city selectors before rendering;
/// slots that read neither are unaffected.
pub fn run_render(data: DashboardData, slot: &str, city: Option<&str>) -> anyhow::Result<String> {
    let registry = dashboard_registry(data)?;
    let session = registry.open("cli");
    if let Some(city) = city {
        for input in [CITY_DROPDOWN, CITY_RADIO] {
            registry.select(&session, input.as_str(), city)?;
        }
    }
    let view = registry.view(&session, slot)?;
    Ok(serde_json::to_string_pretty(&*view)?)
}
