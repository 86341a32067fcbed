pub mod car;
pub mod dealer;
pub mod notice;

pub use car::Car;
pub use dealer::DealerRecord;
pub use notice::{Notice, NoticeLevel};
