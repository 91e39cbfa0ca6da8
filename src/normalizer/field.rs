/// The flattened input columns a raw row is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    State,
    Date,
    Description,
    From,
    To,
    Amount,
    CurrencyName,
    CurrencyCode
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Id,
        Field::State,
        Field::Date,
        Field::Description,
        Field::From,
        Field::To,
        Field::Amount,
        Field::CurrencyName,
        Field::CurrencyCode
    ];

    /// The column name used by every input source for this field.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::State => "state",
            Field::Date => "date",
            Field::Description => "description",
            Field::From => "from",
            Field::To => "to",
            Field::Amount => "amount",
            Field::CurrencyName => "currency_name",
            Field::CurrencyCode => "currency_code"
        }
    }
}
