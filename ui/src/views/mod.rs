mod franchise;
pub use franchise::FranchisePage;

mod main_page;
pub use main_page::MainPage;
