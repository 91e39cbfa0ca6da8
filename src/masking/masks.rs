use crate::masking::MaskError;

const ACCOUNT_LENGTH: usize = 20;
const ACCOUNT_VISIBLE_DIGITS: usize = 4;

/// Masks a card number of 13, 15, 16, 18 or 19 digits as `XXXX XX** **** <tail>`.
///
/// Non-digit characters (spaces, dashes) are stripped first. How many trailing digits
/// stay visible depends on the length of the number:
///
/// | length | visible tail |
/// |--------|--------------|
/// | 13     | 1            |
/// | 15     | 3            |
/// | 16     | 4            |
/// | 18     | 2            |
/// | 19     | 3            |
pub fn mask_card_number(card_number: &str) -> Result<String, MaskError> {
    let digits = only_digits(card_number);

    let visible = match digits.len() {
        0 => return Err(MaskError::invalid_format("Card number is empty")),
        13 => 1,
        15 => 3,
        16 => 4,
        18 => 2,
        19 => 3,
        length => {
            return Err(MaskError::invalid_format(format!(
                "Card number must have 13, 15, 16, 18 or 19 digits, got {length}"
            )))
        }
    };

    Ok(format!("{} {}** **** {}", &digits[..4], &digits[4..6], &digits[digits.len() - visible..]))
}

/// Masks a 20 digit account number as `**XXXX`.
pub fn mask_account_number(account_number: &str) -> Result<String, MaskError> {
    let digits = only_digits(account_number);

    if digits.len() != ACCOUNT_LENGTH {
        return Err(MaskError::invalid_format(format!(
            "Account number must have exactly {ACCOUNT_LENGTH} digits, got {}", digits.len()
        )));
    }

    Ok(format!("**{}", &digits[ACCOUNT_LENGTH - ACCOUNT_VISIBLE_DIGITS..]))
}

fn only_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
