//! Heuristic per-character advance table shared with the companion renderer.
//!
//! Widths are multiples of the font size. Rules are evaluated in order and the first match wins;
//! anything unmatched falls through to [`DEFAULT_MULTIPLIER`]. The values are a cross-renderer
//! contract: changing any entry shifts overlay positions relative to the final render.

/// Named character class from the width table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidthClass {
    /// `1`
    DigitOne,
    /// `i l ! | I j . ,`
    VeryNarrow,
    /// `t f r ' "`
    Narrow,
    /// `-`
    Hyphen,
    /// `W M`
    VeryWideLatin,
    /// `w m`
    WideLatinLower,
    /// ASCII space.
    Space,
    /// Precomposed Hangul syllables, U+AC00..=U+D7A3.
    HangulSyllable,
    /// Hangul compatibility consonants, U+3131..=U+314E.
    HangulConsonant,
    /// Hangul compatibility vowels, U+314F..=U+3163.
    HangulVowel,
    /// Hangul filler and archaic compatibility jamo, U+3164..=U+318E.
    HangulCompatFiller,
    /// `0 8`
    RoundDigit,
    /// `2`-`7` and `9`
    Digit,
    /// `A H N U V X Y Z`
    WideCaps,
    /// `Q G O D`
    RoundCaps,
    /// `B C E F K L P R S T J`
    MediumCaps,
    /// `a c e g o q s`
    RoundLower,
    /// `b d h k n p u v x y z`
    MediumLower,
    /// `_ = +`
    UnderscoreLike,
    /// `@ % # &`
    Symbol,
    /// Anything not covered by a rule.
    Default,
}

#[derive(Clone, Copy, Debug)]
enum Matcher {
    Set(&'static [char]),
    Range(char, char),
}

impl Matcher {
    fn matches(self, c: char) -> bool {
        match self {
            Matcher::Set(set) => set.contains(&c),
            Matcher::Range(lo, hi) => (lo..=hi).contains(&c),
        }
    }
}

/// One row of the width table.
#[derive(Clone, Copy, Debug)]
pub struct WidthRule {
    class: WidthClass,
    matcher: Matcher,
    multiplier: f64,
}

impl WidthRule {
    const fn set(class: WidthClass, chars: &'static [char], multiplier: f64) -> Self {
        Self {
            class,
            matcher: Matcher::Set(chars),
            multiplier,
        }
    }

    const fn range(class: WidthClass, lo: char, hi: char, multiplier: f64) -> Self {
        Self {
            class,
            matcher: Matcher::Range(lo, hi),
            multiplier,
        }
    }

    /// Class this rule assigns.
    pub fn class(&self) -> WidthClass {
        self.class
    }

    /// Width as a multiple of the font size.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Whether `c` belongs to this rule's class.
    pub fn matches(&self, c: char) -> bool {
        self.matcher.matches(c)
    }
}

/// Multiplier for characters no rule matches.
pub const DEFAULT_MULTIPLIER: f64 = 0.45;

/// Ordered width table. Order matters only where classes could overlap, but it is kept exactly
/// as the companion renderer evaluates it.
pub const WIDTH_RULES: &[WidthRule] = &[
    WidthRule::set(WidthClass::DigitOne, &['1'], 0.2),
    WidthRule::set(
        WidthClass::VeryNarrow,
        &['i', 'l', '!', '|', 'I', 'j', '.', ','],
        0.25,
    ),
    WidthRule::set(WidthClass::Narrow, &['t', 'f', 'r', '\'', '"'], 0.35),
    WidthRule::set(WidthClass::Hyphen, &['-'], 0.35),
    WidthRule::set(WidthClass::VeryWideLatin, &['W', 'M'], 0.7),
    WidthRule::set(WidthClass::WideLatinLower, &['w', 'm'], 0.65),
    WidthRule::set(WidthClass::Space, &[' '], 0.2),
    WidthRule::range(WidthClass::HangulSyllable, '\u{AC00}', '\u{D7A3}', 0.7),
    WidthRule::range(WidthClass::HangulConsonant, '\u{3131}', '\u{314E}', 0.4),
    WidthRule::range(WidthClass::HangulVowel, '\u{314F}', '\u{3163}', 0.3),
    WidthRule::range(WidthClass::HangulCompatFiller, '\u{3164}', '\u{318E}', 0.45),
    WidthRule::set(WidthClass::RoundDigit, &['0', '8'], 0.5),
    WidthRule::set(
        WidthClass::Digit,
        &['2', '3', '4', '5', '6', '7', '9'],
        0.45,
    ),
    WidthRule::set(
        WidthClass::WideCaps,
        &['A', 'H', 'N', 'U', 'V', 'X', 'Y', 'Z'],
        0.55,
    ),
    WidthRule::set(WidthClass::RoundCaps, &['Q', 'G', 'O', 'D'], 0.6),
    WidthRule::set(
        WidthClass::MediumCaps,
        &['B', 'C', 'E', 'F', 'K', 'L', 'P', 'R', 'S', 'T', 'J'],
        0.5,
    ),
    WidthRule::set(
        WidthClass::RoundLower,
        &['a', 'c', 'e', 'g', 'o', 'q', 's'],
        0.5,
    ),
    WidthRule::set(
        WidthClass::MediumLower,
        &['b', 'd', 'h', 'k', 'n', 'p', 'u', 'v', 'x', 'y', 'z'],
        0.5,
    ),
    WidthRule::set(WidthClass::UnderscoreLike, &['_', '=', '+'], 0.4),
    WidthRule::set(WidthClass::Symbol, &['@', '%', '#', '&'], 0.6),
];

/// Class of `c` under first-match-wins evaluation.
pub fn classify(c: char) -> WidthClass {
    WIDTH_RULES
        .iter()
        .find(|rule| rule.matches(c))
        .map_or(WidthClass::Default, WidthRule::class)
}

/// Width of `c` as a multiple of the font size.
pub fn width_multiplier(c: char) -> f64 {
    WIDTH_RULES
        .iter()
        .find(|rule| rule.matches(c))
        .map_or(DEFAULT_MULTIPLIER, WidthRule::multiplier)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/glyph_width.rs"]
mod tests;
