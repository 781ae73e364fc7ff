use crate::err::LpErr;
use crate::{Integer, Num};
use regex::Regex;

/// 条件：选择方式以及可选的否定
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Cond {
    select: Select,
    not: bool,
}

impl Cond {
    pub(crate) fn new(select: Select, not: bool) -> Cond {
        Cond { select, not }
    }

    pub(crate) fn test(&self, input: &str) -> bool {
        self.select.test(input) != self.not
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum TextSelectMode {
    Upper,
    Lower,
    Empty,
    Blank,
}

#[derive(Debug, Clone)]
pub(crate) enum Select {
    /// len <min>,<max>
    TextLenRange { min: Option<usize>, max: Option<usize> },
    /// len =<len>
    TextLenSpec { spec: usize },
    /// num <min>,<max>，无法解析为数时不满足
    NumRange { min: Option<Num>, max: Option<Num> },
    /// num =<spec>
    NumSpec { spec: Num },
    /// num[ integer|float]
    Num { integer: Option<bool> },
    /// upper|lower|empty|blank
    Text { mode: TextSelectMode },
    /// reg <exp>，整体匹配
    RegMatch(Regex),
}

impl PartialEq for Select {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Select::TextLenRange { min: l_min, max: l_max }, Select::TextLenRange { min: r_min, max: r_max }) => {
                l_min == r_min && l_max == r_max
            }
            (Select::TextLenSpec { spec: l }, Select::TextLenSpec { spec: r }) => l == r,
            (Select::NumRange { min: l_min, max: l_max }, Select::NumRange { min: r_min, max: r_max }) => {
                l_min == r_min && l_max == r_max
            }
            (Select::NumSpec { spec: l }, Select::NumSpec { spec: r }) => l == r,
            (Select::Num { integer: l }, Select::Num { integer: r }) => l == r,
            (Select::Text { mode: l }, Select::Text { mode: r }) => l == r,
            // Regex 比较模式字符串
            (Select::RegMatch(l), Select::RegMatch(r)) => l.as_str() == r.as_str(),
            _ => false,
        }
    }
}

fn in_range<T: PartialOrd>(value: T, min: &Option<T>, max: &Option<T>) -> bool {
    min.as_ref().is_none_or(|min| &value >= min) && max.as_ref().is_none_or(|max| &value <= max)
}

impl Select {
    pub(crate) fn new_reg_match(regex: &str) -> Result<Select, LpErr> {
        let reg = format!(r"\A(?:{})\z", regex);
        Regex::new(&reg).map(Select::RegMatch).map_err(|err| LpErr::ParseRegexErr { reg, err: err.to_string() })
    }

    fn test(&self, input: &str) -> bool {
        match self {
            Select::TextLenRange { min, max } => in_range(input.chars().count(), min, max),
            Select::TextLenSpec { spec } => input.chars().count() == *spec,
            Select::NumRange { min, max } => input.parse::<Num>().is_ok_and(|num| in_range(num, min, max)),
            Select::NumSpec { spec } => input.parse::<Num>().is_ok_and(|num| num == *spec),
            Select::Num { integer } => match integer {
                Some(true) => input.parse::<Integer>().is_ok(),
                Some(false) => input.parse::<Integer>().is_err() && input.parse::<Num>().is_ok(),
                None => input.parse::<Num>().is_ok(),
            },
            Select::Text { mode } => match mode {
                TextSelectMode::Upper => input.chars().all(|c| !c.is_lowercase()),
                TextSelectMode::Lower => input.chars().all(|c| !c.is_uppercase()),
                TextSelectMode::Empty => input.is_empty(),
                TextSelectMode::Blank => input.chars().all(char::is_whitespace),
            },
            Select::RegMatch(regex) => regex.is_match(input),
        }
    }
}
