//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome, cards, forms, and the widget preview.
//! They raise intents through callbacks or edit page-owned signals; remote
//! work stays with the pages and their controllers.

pub mod chat_preview;
pub mod confirm_dialog;
pub mod empty_state;
pub mod field_error;
pub mod follow_up_card;
pub mod follow_up_form;
pub mod model_card;
pub mod model_form;
pub mod page_header;
pub mod sidebar;
pub mod stat_card;
pub mod tab_bar;
pub mod toast_stack;
pub mod widget_advanced_tab;
pub mod widget_appearance_tab;
pub mod widget_content_tab;
