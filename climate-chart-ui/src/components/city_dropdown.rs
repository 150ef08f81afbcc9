//! Dropdown selector feeding the bar chart.

use crate::state::AppState;
use climate_bindings::dashboard::CITY_DROPDOWN;
use climate_obs::City;
use dioxus::prelude::*;

/// City dropdown (`dropdown1`). Writes the chosen city to `dropdown_city`.
#[component]
pub fn CityDropdown() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.dropdown_city)();

    let on_change = move |evt: Event<FormData>| {
        state.dropdown_city.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: CITY_DROPDOWN.as_str(),
                style: "font-weight: bold; margin-right: 8px;",
                "City: "
            }
            select {
                id: CITY_DROPDOWN.as_str(),
                onchange: on_change,
                for city in City::ALL {
                    option {
                        value: city.name(),
                        selected: city.name() == selected,
                        "{city}"
                    }
                }
            }
        }
    }
}
