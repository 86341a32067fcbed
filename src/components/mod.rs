pub mod car_card;
pub mod inventory_list;
pub mod login_screen;
pub mod toast;

pub use car_card::CarCard;
pub use inventory_list::InventoryList;
pub use login_screen::LoginScreen;
pub use toast::Toast;
