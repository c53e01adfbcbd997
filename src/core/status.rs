//! Per-letter verdicts

/// Verdict for one letter of a guess
///
/// `Unknown` is only an unset marker; it never appears in feedback that a
/// strategy is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Unknown,
    /// Letter does not occur (or not that many times)
    NotPresent,
    /// Letter occurs somewhere else
    Present,
    /// Letter is in the right place
    Placed,
}

impl Status {
    /// The three verdicts a collaborator may give, in editing order
    pub const VERDICTS: [Self; 3] = [Self::NotPresent, Self::Present, Self::Placed];

    /// Decision-tree key symbol: `0`, `1` or `2`
    #[must_use]
    pub const fn code(self) -> Option<char> {
        match self {
            Self::NotPresent => Some('0'),
            Self::Present => Some('1'),
            Self::Placed => Some('2'),
            Self::Unknown => None,
        }
    }

    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            '0' => Some(Self::NotPresent),
            '1' => Some(Self::Present),
            '2' => Some(Self::Placed),
            _ => None,
        }
    }

    /// Parse a symbol typed by a human
    ///
    /// Accepts the key digits, `G`/`Y`/`X`/`-`/`_` in either case and the square emoji.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Placed),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'X' | 'x' | '-' | '_' | '⬜' | '⬛' => Some(Self::NotPresent),
            _ => Self::from_code(symbol),
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Placed => '🟩',
            Self::Present => '🟨',
            Self::NotPresent => '⬛',
            Self::Unknown => '⬜',
        }
    }

    /// Next verdict in editing order, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Unknown | Self::Placed => Self::NotPresent,
            Self::NotPresent => Self::Present,
            Self::Present => Self::Placed,
        }
    }

    /// Previous verdict in editing order, wrapping around
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Unknown | Self::NotPresent => Self::Placed,
            Self::Present => Self::NotPresent,
            Self::Placed => Self::Present,
        }
    }

    /// True for the verdicts that confirm an occurrence of the letter
    #[must_use]
    pub const fn confirms_letter(self) -> bool {
        matches!(self, Self::Present | Self::Placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_for_verdicts() {
        for status in Status::VERDICTS {
            let code = status.code().unwrap();
            assert_eq!(Status::from_code(code), Some(status));
        }
        assert_eq!(Status::Unknown.code(), None);
        assert_eq!(Status::from_code('3'), None);
    }

    #[test]
    fn symbols_accept_letters_digits_and_emoji() {
        assert_eq!(Status::from_symbol('g'), Some(Status::Placed));
        assert_eq!(Status::from_symbol('Y'), Some(Status::Present));
        assert_eq!(Status::from_symbol('-'), Some(Status::NotPresent));
        assert_eq!(Status::from_symbol('2'), Some(Status::Placed));
        assert_eq!(Status::from_symbol('🟨'), Some(Status::Present));
        assert_eq!(Status::from_symbol('q'), None);
    }

    #[test]
    fn editing_cycles_through_verdicts_only() {
        let mut status = Status::Unknown;
        for expected in [
            Status::NotPresent,
            Status::Present,
            Status::Placed,
            Status::NotPresent,
        ] {
            status = status.next();
            assert_eq!(status, expected);
        }
        assert_eq!(Status::NotPresent.previous(), Status::Placed);
        assert_eq!(Status::Placed.previous(), Status::Present);
    }
}
