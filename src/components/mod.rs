//! UI components, one file per rendered region.

pub mod builder_form;
pub mod history_list;
pub mod nav_bar;
pub mod notification;
pub mod output_panel;
pub mod stats_panel;
pub mod template_gallery;
