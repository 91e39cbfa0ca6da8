use crate::masking::{mask_account_number, mask_card_number, MaskError};

const ACCOUNT_PREFIX: &str = "Счет ";

/// Masks an endpoint such as `Счет 64686473678894779589` or `Visa Platinum 8990922113665229`.
///
/// Accounts keep their `Счет ` prefix and show the last four digits. Anything else is
/// treated as a card: the scheme name before the first digit is kept and the number
/// is masked with [`mask_card_number`], so every supported card length works.
pub fn mask_identifier(identifier: &str) -> Result<String, MaskError> {
    if let Some(number) = identifier.strip_prefix(ACCOUNT_PREFIX) {
        return Ok(format!("{ACCOUNT_PREFIX}{}", mask_account_number(number)?));
    }

    let split = identifier.find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| MaskError::invalid_format(format!("Identifier '{identifier}' has no number")))?;
    let (name, number) = identifier.split_at(split);

    Ok(format!("{name}{}", mask_card_number(number)?))
}

/// Turns `2024-03-11T02:26:18.671407` into `11.03.2024`.
///
/// Only the leading `YYYY-MM-DD` is looked at and its shape is checked; the calendar is not.
pub fn format_date(timestamp: &str) -> Result<String, MaskError> {
    let date = timestamp.get(..10)
        .filter(|date| is_iso_date(date))
        .ok_or_else(|| MaskError::invalid_format(format!("'{timestamp}' does not start with YYYY-MM-DD")))?;

    Ok(format!("{}.{}.{}", &date[8..10], &date[5..7], &date[..4]))
}

fn is_iso_date(date: &str) -> bool {
    date.bytes().enumerate().all(|(index, byte)| match index {
        4 | 7 => byte == b'-',
        _ => byte.is_ascii_digit()
    })
}
