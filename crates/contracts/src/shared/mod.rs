pub mod contact;
pub mod loading;
pub mod outbound;
pub mod price;
