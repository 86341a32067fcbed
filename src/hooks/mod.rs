pub mod use_dealer;
pub mod use_dealer_cars;
pub mod use_dealer_login;

pub use use_dealer::use_dealer;
pub use use_dealer_cars::use_dealer_cars;
pub use use_dealer_login::use_dealer_login;
