//! Reusable Dioxus RSX components for the climate dashboard.

mod chart_header;
mod city_dropdown;
mod city_radio;
mod download_button;
mod error_display;
mod loading_spinner;
mod slot_container;

pub use chart_header::ChartHeader;
pub use city_dropdown::CityDropdown;
pub use city_radio::CityRadio;
pub use download_button::DownloadButton;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use slot_container::SlotContainer;
