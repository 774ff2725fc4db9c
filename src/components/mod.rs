pub mod config_notice;
pub mod content_nav;
pub mod fieldset;
pub mod image_radio;
pub mod page_title;
pub mod rebuild_tooltip;
pub mod templates_table;
