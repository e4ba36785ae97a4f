use chip_engine::cards::{Card, Rank, Suit};

/// Single-character placeholder for a card that was intentionally not shown.
pub const NO_REVEAL: char = 'n';

/// Parse a numeric literal with an optional `k`/`m` magnitude suffix.
///
/// Accepts plain decimals and fractional values before the suffix, case
/// insensitively. Anything else, including an empty string, yields `NaN`.
///
/// # Examples
///
/// ```
/// use chip::token::parse_number;
///
/// assert_eq!(parse_number("100"), 100.0);
/// assert_eq!(parse_number("50k"), 50_000.0);
/// assert_eq!(parse_number("2.5m"), 2_500_000.0);
/// assert_eq!(parse_number("1.5K"), 1_500.0);
/// assert!(parse_number("").is_nan());
/// assert!(parse_number("abc").is_nan());
/// ```
pub fn parse_number(token: &str) -> f64 {
    let trimmed = token.trim().to_ascii_lowercase();
    let (body, scale) = if let Some(body) = trimmed.strip_suffix('k') {
        (body, 1_000.0)
    } else if let Some(body) = trimmed.strip_suffix('m') {
        (body, 1_000_000.0)
    } else {
        (trimmed.as_str(), 1.0)
    };
    if !is_plain_decimal(body) {
        return f64::NAN;
    }
    match body.parse::<f64>() {
        Ok(value) => value * scale,
        Err(_) => f64::NAN,
    }
}

/// Whether a token is a well-formed non-negative number, with or without a
/// magnitude suffix.
pub fn is_numeric_token(token: &str) -> bool {
    !parse_number(token).is_nan()
}

/// Parse a chip amount, truncating any fractional remainder.
/// Returns `None` for malformed or negative values.
pub fn parse_chips(token: &str) -> Option<u32> {
    let value = parse_number(token);
    if value.is_nan() || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}

// Digits and dots only, so forms like "1e3", "+5", or "1..5" are rejected
// even though the float parser would accept some of them.
fn is_plain_decimal(body: &str) -> bool {
    !body.is_empty()
        && body.chars().all(|c| c.is_ascii_digit() || c == '.')
        && body.parse::<f64>().is_ok()
}

/// Parse a stream of card tokens into cards and no-reveal markers.
///
/// Cards may be whitespace-separated or concatenated with no separator. The
/// scan is strict: at each position the no-reveal marker consumes one
/// character, otherwise the next two characters must form a rank and a suit.
/// Any other shape fails the whole stream (`None`).
///
/// # Examples
///
/// ```
/// use chip::token::parse_cards;
///
/// assert_eq!(parse_cards("2h3s4c5h").unwrap().len(), 4);
/// assert_eq!(parse_cards("ahkd qc5h").unwrap().len(), 4);
/// assert_eq!(parse_cards("n").unwrap(), vec![None]);
/// assert!(parse_cards("1d").is_none());
/// ```
pub fn parse_cards(input: &str) -> Option<Vec<Option<Card>>> {
    let chars: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut cards = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].eq_ignore_ascii_case(&NO_REVEAL) {
            cards.push(None);
            i += 1;
            continue;
        }
        if i + 1 >= chars.len() {
            return None;
        }
        let rank = Rank::from_char(chars[i])?;
        let suit = Suit::from_char(chars[i + 1])?;
        cards.push(Some(Card { rank, suit }));
        i += 2;
    }
    Some(cards)
}
