pub mod app;
pub mod call_log_panel;
pub mod concept_cards;
pub mod concept_modal;
pub mod drop_zone;
pub mod explosion_counter;
pub mod live_region;
pub mod nav_bar;
pub mod playground_view;
pub mod progress_tracker;
pub mod shape_color_demo;
pub mod uml_diagram;
