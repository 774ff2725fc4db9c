pub mod theme_manager;
