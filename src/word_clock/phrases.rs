/// Lit cell of a word clock phrase as (x, y)
pub type Cell = (u8, u8);

const ONE: &[Cell] = &[(1, 7), (4, 7), (7, 7)];
const TWO: &[Cell] = &[(0, 6), (1, 6), (1, 7)];
const THREE: &[Cell] = &[(3, 5), (4, 5), (5, 5), (6, 5), (7, 5)];
const FOUR: &[Cell] = &[(0, 7), (1, 7), (2, 7), (3, 7)];
const HOUR_FIVE: &[Cell] = &[(0, 4), (1, 4), (2, 4), (3, 4)];
const SIX: &[Cell] = &[(0, 5), (1, 5), (2, 5)];
const SEVEN: &[Cell] = &[(0, 5), (4, 6), (5, 6), (6, 6), (7, 6)];
const EIGHT: &[Cell] = &[(3, 4), (4, 4), (5, 4), (6, 4), (7, 4)];
const NINE: &[Cell] = &[(4, 7), (5, 7), (6, 7), (7, 7)];
const HOUR_TEN: &[Cell] = &[(7, 4), (7, 5), (7, 6)];
const ELEVEN: &[Cell] = &[(2, 6), (3, 6), (4, 6), (5, 6), (6, 6), (7, 6)];
const TWELVE: &[Cell] = &[(0, 6), (1, 6), (2, 6), (3, 6), (5, 6), (6, 6)];
const MIN_FIVE: &[Cell] = &[(4, 2), (5, 2), (6, 2), (7, 2)];
const MIN_TEN: &[Cell] = &[(2, 0), (4, 0), (5, 0)];
const QUARTER: &[Cell] = &[(1, 1), (2, 1), (3, 1), (4, 1), (5, 1), (6, 1), (7, 1)];
const TWENTY: &[Cell] = &[(2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0)];
const HALF: &[Cell] = &[(1, 2), (2, 2), (3, 2), (4, 2)];
const PAST: &[Cell] = &[(2, 3), (3, 3), (4, 3), (5, 3)];
const TO: &[Cell] = &[(5, 3), (6, 3)];

/// Word of the clock face
///
/// Words share letters, so some cells belong to several phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    One,
    Two,
    Three,
    Four,
    HourFive,
    Six,
    Seven,
    Eight,
    Nine,
    HourTen,
    Eleven,
    Twelve,
    MinFive,
    MinTen,
    Quarter,
    Twenty,
    Half,
    Past,
    To,
}

impl Phrase {
    /// Hour words indexed by the hour on a 12 hour dial, 0 is twelve
    pub const HOURS: [Self; 12] = [
        Self::Twelve,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::HourFive,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::HourTen,
        Self::Eleven,
    ];

    /// Cells lit by this word
    pub const fn pixels(self) -> &'static [Cell] {
        match self {
            Self::One => ONE,
            Self::Two => TWO,
            Self::Three => THREE,
            Self::Four => FOUR,
            Self::HourFive => HOUR_FIVE,
            Self::Six => SIX,
            Self::Seven => SEVEN,
            Self::Eight => EIGHT,
            Self::Nine => NINE,
            Self::HourTen => HOUR_TEN,
            Self::Eleven => ELEVEN,
            Self::Twelve => TWELVE,
            Self::MinFive => MIN_FIVE,
            Self::MinTen => MIN_TEN,
            Self::Quarter => QUARTER,
            Self::Twenty => TWENTY,
            Self::Half => HALF,
            Self::Past => PAST,
            Self::To => TO,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => "ONE",
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Four => "FOUR",
            Self::HourFive => "HOUR_FIVE",
            Self::Six => "SIX",
            Self::Seven => "SEVEN",
            Self::Eight => "EIGHT",
            Self::Nine => "NINE",
            Self::HourTen => "HOUR_TEN",
            Self::Eleven => "ELEVEN",
            Self::Twelve => "TWELVE",
            Self::MinFive => "MIN_FIVE",
            Self::MinTen => "MIN_TEN",
            Self::Quarter => "QUARTER",
            Self::Twenty => "TWENTY",
            Self::Half => "HALF",
            Self::Past => "PAST",
            Self::To => "TO",
        }
    }
}
