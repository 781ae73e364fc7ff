//! 紧凑参数值的解析器，例如范围`0,10,2`、条件范围`1,`和特定值`=3`。

use crate::err::LpErr;
use crate::{Integer, Num};
use nom::character::complete::{char, digit1, one_of};
use nom::combinator::{all_consuming, map, map_res, opt, recognize, verify};
use nom::error::context;
use nom::sequence::preceded;
use nom::{IResult, Parser};
use nom_language::error::VerboseError;

/// 解析错误的类型
pub(in crate::parse) type ParserError<'a> = VerboseError<&'a str>;

/// 重新导出解析整数的函数
pub(in crate::parse) use nom::character::complete::i64 as parse_integer;
pub(in crate::parse) use nom::character::complete::usize as parse_usize;

/// 使用`parser`完整解析参数`arg_value`，不允许有剩余内容。
pub(in crate::parse) fn parse_whole<'a, O>(
    parser: impl Parser<&'a str, Output = O, Error = ParserError<'a>>, arg_value: &'a str, cmd: &'static str,
    arg: &'static str,
) -> Result<O, LpErr> {
    all_consuming(parser).parse(arg_value).map(|(_, res)| res).map_err(|err| LpErr::ArgParseErr {
        cmd,
        arg,
        arg_value: arg_value.to_owned(),
        error: err.to_string(),
    })
}

/// 整数或有限浮点数：`[+-]<digits>[.<digits>]`
pub(in crate::parse) fn parse_num(input: &str) -> IResult<&str, Num, ParserError<'_>> {
    context(
        "<num>",
        map_res(recognize((opt(one_of("+-")), digit1, opt((char('.'), digit1)))), |s: &str| s.parse::<Num>()),
    )
    .parse(input)
}

/// `<start>,<end>[,<step>]`，步长不能为零，默认为1
pub(in crate::parse) fn parse_range(input: &str) -> IResult<&str, (Integer, Integer, Integer), ParserError<'_>> {
    map(
        (
            context("<start>", parse_integer),
            preceded(char(','), context("<end>", parse_integer)),
            opt(preceded(char(','), verify(context("<step>", parse_integer), |s: &Integer| *s != 0))),
        ),
        |(start, end, step)| (start, end, step.unwrap_or(1)),
    )
    .parse(input)
}

/// `<start>[,<step>]`，步长不能为零，默认为1
pub(in crate::parse) fn parse_gen(input: &str) -> IResult<&str, (Integer, Integer), ParserError<'_>> {
    map(
        (
            context("<start>", parse_integer),
            opt(preceded(char(','), verify(context("<step>", parse_integer), |s: &Integer| *s != 0))),
        ),
        |(start, step)| (start, step.unwrap_or(1)),
    )
    .parse(input)
}

/// `[<min>],[<max>]`，最小值和最大值至少指定其一
pub(in crate::parse) fn parse_cond_range<'a, T, F>(
    range_arg: F,
) -> impl Parser<&'a str, Output = (Option<T>, Option<T>), Error = ParserError<'a>>
where
    F: Parser<&'a str, Output = T, Error = ParserError<'a>> + Clone,
{
    verify(
        map(
            (context("[<min>]", opt(range_arg.clone())), char(','), context("[<max>]", opt(range_arg))),
            |(min, _, max)| (min, max),
        ),
        |(min, max): &(Option<T>, Option<T>)| min.is_some() || max.is_some(),
    )
}

/// `=<spec>`
pub(in crate::parse) fn parse_cond_spec<'a, T, F>(
    spec_arg: F,
) -> impl Parser<&'a str, Output = T, Error = ParserError<'a>>
where
    F: Parser<&'a str, Output = T, Error = ParserError<'a>>,
{
    preceded(char('='), context("<spec>", spec_arg))
}
