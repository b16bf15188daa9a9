pub mod components;
pub mod display;
pub mod i18n;
pub mod icons;
