// UI Components

pub mod category_tabs;
pub mod share_form;

pub use category_tabs::CategoryTabs;
pub use share_form::ShareForm;
