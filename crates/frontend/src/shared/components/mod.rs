pub mod category_filter;
pub mod loading;
pub mod page_header;
pub mod project_card;
pub mod service_card;
pub mod ui;
