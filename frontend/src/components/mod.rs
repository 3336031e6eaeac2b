pub mod assistant_panel;
pub mod bottom_nav;
pub mod cow_list;
pub mod cow_modal;
pub mod dashboard;
pub mod header;
pub mod insemination_list;
pub mod insemination_modal;
pub mod login_screen;
pub mod pregnancy_list;
pub mod pull_to_refresh;
