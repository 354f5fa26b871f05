pub mod character_list;
pub mod menu;
pub mod text_panel;
