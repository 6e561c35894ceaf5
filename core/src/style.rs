//! # Casing Styles
//!
//! A [`Style`] describes a naming convention as a handful of independent traits instead of a
//! closed list of names:
//!
//! - `first_char_upper`: the first significant character is upper-case
//! - `word_body_upper`: characters after the first one of each word are upper-case
//! - `word_start_case_switch`: a word starts where the case flips, no separator needed
//! - separators: any combination of `-`, ` ` and `_` written at every word boundary
//!
//! The well known conventions are associated constants over the same traits:
//!
//! | style                   | example          |
//! |-------------------------|------------------|
//! | [`Style::PASCAL`]       | `ThisIsATest`    |
//! | [`Style::CAMEL`]        | `thisIsATest`    |
//! | [`Style::KEBAB`]        | `this-is-a-test` |
//! | [`Style::SNAKE`]        | `this_is_a_test` |
//! | [`Style::COBOL`]        | `THIS-IS-A-TEST` |
//! | [`Style::MACRO`]        | `THIS_IS_A_TEST` |
//! | [`Style::LOWER`]        | `this is a test` |
//! | [`Style::UPPER`]        | `THIS IS A TEST` |
//! | [`Style::TRAIN`]        | `This-Is-A-Test` |
//! | [`Style::SPREADSHEET`]  | `This Is A Test` |
//!
//! A style that has neither a separator nor a case switch can't mark word boundaries. Such a
//! style is only ever produced by detection and is never a valid output target; the all-false
//! value is named [`Style::INDETERMINATE`].
//!
//! ```rust
//! use identcase::style::{Separator, Style};
//!
//! let train = Style::new()
//!     .with_first_char_upper(true)
//!     .with_word_start_case_switch(true)
//!     .with_separator(Separator::Dash);
//! assert_eq!(train, Style::TRAIN);
//! assert_eq!(train.to_string(), "train");
//! assert_eq!("http-header".parse::<Style>().ok(), Some(Style::TRAIN));
//! ```

use std::{fmt::Display, str::FromStr};

use crate::error::CasingError;

/// A character written between two words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    Dash,
    Space,
    Underscore,
}

impl Separator {
    /// Emission order when a style carries more than one separator.
    pub const ALL: [Separator; 3] = [Separator::Dash, Separator::Space, Separator::Underscore];

    pub const fn as_char(self) -> char {
        match self {
            Separator::Dash => '-',
            Separator::Space => ' ',
            Separator::Underscore => '_',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Separator::Dash),
            ' ' => Some(Separator::Space),
            '_' => Some(Separator::Underscore),
            _ => None,
        }
    }
}

/// A casing convention expressed as independent traits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    first_char_upper: bool,
    word_body_upper: bool,
    word_start_case_switch: bool,
    dash: bool,
    space: bool,
    underscore: bool,
}

impl Style {
    pub const INDETERMINATE: Style = Style::new();

    pub const PASCAL: Style = Style::new()
        .with_first_char_upper(true)
        .with_word_start_case_switch(true);
    pub const CAMEL: Style = Style::new().with_word_start_case_switch(true);
    pub const KEBAB: Style = Style::new().with_separator(Separator::Dash);
    pub const SNAKE: Style = Style::new().with_separator(Separator::Underscore);
    pub const COBOL: Style = Style::new()
        .with_first_char_upper(true)
        .with_word_body_upper(true)
        .with_separator(Separator::Dash);
    pub const MACRO: Style = Style::new()
        .with_first_char_upper(true)
        .with_word_body_upper(true)
        .with_separator(Separator::Underscore);
    pub const LOWER: Style = Style::new().with_separator(Separator::Space);
    pub const UPPER: Style = Style::new()
        .with_first_char_upper(true)
        .with_word_body_upper(true)
        .with_separator(Separator::Space);
    pub const TRAIN: Style = Style::new()
        .with_first_char_upper(true)
        .with_word_start_case_switch(true)
        .with_separator(Separator::Dash);
    pub const SPREADSHEET: Style = Style::new()
        .with_first_char_upper(true)
        .with_word_start_case_switch(true)
        .with_separator(Separator::Space);

    /// The style identifiers are normalized to.
    pub const CANONICAL: Style = Style::PASCAL;

    pub const NAMED: [Style; 10] = [
        Style::PASCAL,
        Style::CAMEL,
        Style::KEBAB,
        Style::SNAKE,
        Style::COBOL,
        Style::MACRO,
        Style::LOWER,
        Style::UPPER,
        Style::TRAIN,
        Style::SPREADSHEET,
    ];

    /// An empty style with every trait unset (equal to [`Style::INDETERMINATE`]).
    pub const fn new() -> Self {
        Self {
            first_char_upper: false,
            word_body_upper: false,
            word_start_case_switch: false,
            dash: false,
            space: false,
            underscore: false,
        }
    }

    pub const fn with_first_char_upper(mut self, value: bool) -> Self {
        self.first_char_upper = value;
        self
    }

    pub const fn with_word_body_upper(mut self, value: bool) -> Self {
        self.word_body_upper = value;
        self
    }

    pub const fn with_word_start_case_switch(mut self, value: bool) -> Self {
        self.word_start_case_switch = value;
        self
    }

    /// Adds a separator. Separators accumulate, they don't replace each other.
    pub const fn with_separator(mut self, separator: Separator) -> Self {
        match separator {
            Separator::Dash => self.dash = true,
            Separator::Space => self.space = true,
            Separator::Underscore => self.underscore = true,
        }
        self
    }

    pub const fn first_char_upper(&self) -> bool {
        self.first_char_upper
    }

    pub const fn word_body_upper(&self) -> bool {
        self.word_body_upper
    }

    pub const fn word_start_case_switch(&self) -> bool {
        self.word_start_case_switch
    }

    /// Case of the first character of every word but the first one.
    ///
    /// With a case switch the word start is the opposite of the body, otherwise it matches it.
    pub const fn word_start_upper(&self) -> bool {
        match self.word_start_case_switch {
            true => !self.word_body_upper,
            false => self.word_body_upper,
        }
    }

    pub const fn has_separator(&self, separator: Separator) -> bool {
        match separator {
            Separator::Dash => self.dash,
            Separator::Space => self.space,
            Separator::Underscore => self.underscore,
        }
    }

    pub fn separators(&self) -> impl Iterator<Item = Separator> + '_ {
        Separator::ALL
            .into_iter()
            .filter(|separator| self.has_separator(*separator))
    }

    /// `true` when the style has no way to mark a word boundary.
    pub const fn is_indeterminate(&self) -> bool {
        !(self.word_start_case_switch || self.dash || self.space || self.underscore)
    }

    pub fn name(&self) -> Option<&'static str> {
        let name = match *self {
            Style::INDETERMINATE => "indeterminate",
            Style::PASCAL => "pascal",
            Style::CAMEL => "camel",
            Style::KEBAB => "kebab",
            Style::SNAKE => "snake",
            Style::COBOL => "cobol",
            Style::MACRO => "macro",
            Style::LOWER => "lower",
            Style::UPPER => "upper",
            Style::TRAIN => "train",
            Style::SPREADSHEET => "spreadsheet",
            _ => return None,
        };
        Some(name)
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(name) = self.name() {
            return write!(f, "{}", name);
        }

        let traits = [
            (self.first_char_upper, "first-upper"),
            (self.word_body_upper, "body-upper"),
            (self.word_start_case_switch, "case-switch"),
            (self.dash, "dash"),
            (self.space, "space"),
            (self.underscore, "underscore"),
        ];
        let mut traits = traits.iter().filter(|(set, _)| *set).map(|(_, name)| name);

        // INDETERMINATE is named, so at least one trait is set here
        if let Some(first) = traits.next() {
            write!(f, "{}", first)?;
        }
        for name in traits {
            write!(f, "+{}", name)?;
        }
        Ok(())
    }
}

impl FromStr for Style {
    type Err = CasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let key = key.strip_suffix("case").unwrap_or(&key);

        match key {
            "pascal" | "uppercamel" => Ok(Style::PASCAL),
            "camel" | "lowercamel" => Ok(Style::CAMEL),
            "kebab" | "dash" => Ok(Style::KEBAB),
            "snake" => Ok(Style::SNAKE),
            "cobol" | "screamingkebab" | "upperkebab" => Ok(Style::COBOL),
            "macro" | "screamingsnake" | "uppersnake" | "constant" => Ok(Style::MACRO),
            "lower" => Ok(Style::LOWER),
            "upper" => Ok(Style::UPPER),
            "train" | "httpheader" => Ok(Style::TRAIN),
            "spreadsheet" | "title" => Ok(Style::SPREADSHEET),
            _ => Err(CasingError::UnknownStyle(s.to_string())),
        }
    }
}
