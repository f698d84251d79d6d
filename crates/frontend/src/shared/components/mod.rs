pub mod entity_table;
pub mod form_modal;
pub mod pagination_controls;
pub mod resource_list;
pub mod table;
pub mod toast;
pub mod ui;
