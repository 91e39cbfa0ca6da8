use std::iter::FusedIterator;
use std::ops::RangeInclusive;

const MAX_CARD_NUMBER: u64 = 9_999_999_999_999_999;

/// Lazily produces card numbers formatted as `XXXX XXXX XXXX XXXX`.
#[derive(Debug, Clone)]
pub struct CardNumbers {
    range: RangeInclusive<u64>
}

/// Yields every card number from `start` to `stop` inclusive, zero-padded to 16 digits.
pub fn card_number_generator(start: u64, stop: u64) -> CardNumbers {
    CardNumbers {
        range: start..=stop.min(MAX_CARD_NUMBER)
    }
}

impl Iterator for CardNumbers {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(format_card_number)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl FusedIterator for CardNumbers {}

fn format_card_number(number: u64) -> String {
    let digits = format!("{number:016}");

    format!("{} {} {} {}", &digits[..4], &digits[4..8], &digits[8..12], &digits[12..])
}
