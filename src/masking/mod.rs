mod card_numbers;
mod display;
mod errors;
mod masks;

pub use card_numbers::{card_number_generator, CardNumbers};
pub use display::{format_date, mask_identifier};
pub use errors::MaskError;
pub use masks::{mask_account_number, mask_card_number};
