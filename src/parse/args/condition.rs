use crate::condition::{Cond, Select, TextSelectMode};
use crate::err::LpErr;
use crate::parse::args::{parse_arg, parse_tag_nocase};
use crate::parse::token::{parse_cond_range, parse_cond_spec, parse_num, parse_usize, parse_whole};
use std::iter::Peekable;

/// 解析条件`[not ]<select>`。
pub(in crate::parse::args) fn parse_cond(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str,
) -> Result<Cond, LpErr> {
    let not = parse_tag_nocase(args, "not");
    Ok(Cond::new(parse_select(args, cmd)?, not))
}

/// 可选条件：下一个参数不是条件关键字时返回`None`，不消耗任何参数。
pub(in crate::parse::args) fn parse_opt_cond(
    args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str,
) -> Result<Option<Cond>, LpErr> {
    match args.peek() {
        Some(arg) if is_cond_keyword(arg) => parse_cond(args, cmd).map(Some),
        _ => Ok(None),
    }
}

fn is_cond_keyword(arg: &str) -> bool {
    ["not", "len", "num", "upper", "lower", "empty", "blank", "reg"].iter().any(|kw| arg.eq_ignore_ascii_case(kw))
}

fn parse_select(args: &mut Peekable<impl Iterator<Item = String>>, cmd: &'static str) -> Result<Select, LpErr> {
    let keyword = args.next().ok_or(LpErr::MissingArg { cmd, arg: "condition" })?;
    match keyword.to_ascii_lowercase().as_str() {
        "len" => {
            let value = parse_arg(args, cmd, "len range or spec")?;
            if let Ok((min, max)) = parse_whole(parse_cond_range(parse_usize), &value, cmd, "len range") {
                Ok(Select::TextLenRange { min, max })
            } else {
                let spec = parse_whole(parse_cond_spec(parse_usize), &value, cmd, "len range or spec")?;
                Ok(Select::TextLenSpec { spec })
            }
        }
        "num" => Ok(parse_num_select(args)),
        "reg" => Select::new_reg_match(&parse_arg(args, cmd, "reg exp")?),
        "upper" => Ok(Select::Text { mode: TextSelectMode::Upper }),
        "lower" => Ok(Select::Text { mode: TextSelectMode::Lower }),
        "empty" => Ok(Select::Text { mode: TextSelectMode::Empty }),
        "blank" => Ok(Select::Text { mode: TextSelectMode::Blank }),
        _ => Err(LpErr::BadArg { cmd, arg: "condition", arg_value: keyword }),
    }
}

/// `num`之后的参数无法识别时不消耗它，退化为选择任意数值。
fn parse_num_select(args: &mut Peekable<impl Iterator<Item = String>>) -> Select {
    let select = match args.peek() {
        Some(value) => {
            if let Ok((min, max)) = parse_whole(parse_cond_range(parse_num), value, "num", "num range") {
                Some(Select::NumRange { min, max })
            } else if let Ok(spec) = parse_whole(parse_cond_spec(parse_num), value, "num", "num spec") {
                Some(Select::NumSpec { spec })
            } else if value.eq_ignore_ascii_case("integer") {
                Some(Select::Num { integer: Some(true) })
            } else if value.eq_ignore_ascii_case("float") {
                Some(Select::Num { integer: Some(false) })
            } else {
                None
            }
        }
        None => None,
    };
    match select {
        Some(select) => {
            args.next();
            select
        }
        None => Select::Num { integer: None },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::args::build_args;
    use crate::Num;

    fn cond(select: Select) -> Result<Cond, LpErr> {
        Ok(Cond::new(select, false))
    }

    fn not(select: Select) -> Result<Cond, LpErr> {
        Ok(Cond::new(select, true))
    }

    #[test]
    fn test_parse_cond_text_len() {
        assert_eq!(
            cond(Select::TextLenRange { min: Some(1), max: Some(3) }),
            parse_cond(&mut build_args("len 1,3"), "")
        );
        assert_eq!(cond(Select::TextLenRange { min: None, max: Some(3) }), parse_cond(&mut build_args("len ,3"), ""));
        assert_eq!(not(Select::TextLenRange { min: Some(1), max: None }), parse_cond(&mut build_args("not len 1,"), ""));
        assert_eq!(cond(Select::TextLenSpec { spec: 3 }), parse_cond(&mut build_args("len =3"), ""));
        assert_eq!(not(Select::TextLenSpec { spec: 3 }), parse_cond(&mut build_args("NOT len =3"), ""));
        assert!(parse_cond(&mut build_args("len ,"), "").is_err());
        assert!(parse_cond(&mut build_args("len 1.2,3"), "").is_err());
        assert!(parse_cond(&mut build_args("len"), "").is_err());
    }

    #[test]
    fn test_parse_cond_num() {
        assert_eq!(
            cond(Select::NumRange { min: Some(Num::from(1)), max: Some(Num::from(3.5)) }),
            parse_cond(&mut build_args("num 1,3.5"), "")
        );
        assert_eq!(
            not(Select::NumRange { min: None, max: Some(Num::from(-3)) }),
            parse_cond(&mut build_args("not num ,-3"), "")
        );
        assert_eq!(cond(Select::NumSpec { spec: Num::from(3) }), parse_cond(&mut build_args("num =3"), ""));
        assert_eq!(cond(Select::Num { integer: Some(true) }), parse_cond(&mut build_args("num integer"), ""));
        assert_eq!(not(Select::Num { integer: Some(false) }), parse_cond(&mut build_args("not num float"), ""));
        assert_eq!(cond(Select::Num { integer: None }), parse_cond(&mut build_args("num"), ""));
        let mut args = build_args("num :take 2");
        assert_eq!(cond(Select::Num { integer: None }), parse_cond(&mut args, ""));
        assert_eq!(Some(":take".to_string()), args.next());
    }

    #[test]
    fn test_parse_cond_text() {
        assert_eq!(cond(Select::Text { mode: TextSelectMode::Upper }), parse_cond(&mut build_args("upper"), ""));
        assert_eq!(cond(Select::Text { mode: TextSelectMode::Lower }), parse_cond(&mut build_args("lower"), ""));
        assert_eq!(not(Select::Text { mode: TextSelectMode::Empty }), parse_cond(&mut build_args("not empty"), ""));
        assert_eq!(cond(Select::Text { mode: TextSelectMode::Blank }), parse_cond(&mut build_args("blank"), ""));
        assert!(parse_cond(&mut build_args(""), "").is_err());
        assert!(parse_cond(&mut build_args("what"), "").is_err());
    }

    #[test]
    fn test_parse_cond_reg() {
        assert_eq!(
            cond(Select::new_reg_match(r"\d+(\.\d+)?").unwrap()),
            parse_cond(&mut build_args(r"reg \d+(\.\d+)?"), "")
        );
        assert!(parse_cond(&mut build_args(r"reg \d{1,"), "").is_err());
    }

    #[test]
    fn test_parse_opt_cond() {
        let mut args = build_args(":to out");
        assert_eq!(Ok(None), parse_opt_cond(&mut args, ""));
        assert_eq!(Some(":to".to_string()), args.next());
        assert_eq!(
            Ok(Some(Cond::new(Select::Text { mode: TextSelectMode::Upper }, true))),
            parse_opt_cond(&mut build_args("not upper"), "")
        );
    }
}
